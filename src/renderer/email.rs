use super::escape_html;
use crate::models::Tool;

/// Subject line of the alert email
pub fn email_subject(count: usize) -> String {
    format!("New AI Tools Discovered ({} new tool(s))", count)
}

/// HTML body listing the new tools
pub fn email_html(tools: &[Tool]) -> String {
    let mut output = String::new();

    output.push_str("<html>\n<body>\n");
    output.push_str("<h2>New AI Tools Discovered!</h2>\n");
    output.push_str(&format!(
        "<p>We found {} new AI tool(s) today:</p>\n<ul>\n",
        tools.len()
    ));

    for tool in tools {
        output.push_str(&email_item(tool));
    }

    output.push_str("</ul>\n");
    output.push_str("<p>Open the chat app to browse all tools.</p>\n");
    output.push_str(
        "<p><small>This is an automated email from the AI tools scraper.</small></p>\n",
    );
    output.push_str("</body>\n</html>\n");

    output
}

fn email_item(tool: &Tool) -> String {
    let or = |value: &str, fallback: &str| {
        let value = value.trim();
        escape_html(if value.is_empty() { fallback } else { value })
    };

    format!(
        "<li>\n<strong><a href=\"{}\">{}</a></strong><br>\nCategory: {}<br>\nDescription: {}<br>\nLaunched: {}\n</li>\n",
        or(&tool.url, "#"),
        or(&tool.name, "Unknown Tool"),
        or(&tool.category, "general"),
        or(&tool.description, "No description"),
        or(&tool.launch_date, "Unknown date"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_subject() {
        assert_eq!(
            email_subject(3),
            "New AI Tools Discovered (3 new tool(s))"
        );
    }

    #[test]
    fn test_email_html_lists_tools() {
        let tools = vec![
            Tool {
                name: "R&D Copilot".to_string(),
                url: "https://rnd.example".to_string(),
                category: "devtools".to_string(),
                description: "Writes <code>".to_string(),
                launch_date: "2024-03-01".to_string(),
                ..Tool::default()
            },
            Tool::default(),
        ];

        let html = email_html(&tools);
        assert!(html.contains("We found 2 new AI tool(s) today"));
        assert!(html.contains("<a href=\"https://rnd.example\">R&amp;D Copilot</a>"));
        assert!(html.contains("Description: Writes &lt;code&gt;"));
        assert!(html.contains("<a href=\"#\">Unknown Tool</a>"));
        assert!(html.contains("Launched: Unknown date"));
    }
}
