use crate::chat::ChatAnswer;
use crate::models::Tool;

/// Render one tool as a Markdown card
pub fn render_tool(tool: &Tool) -> String {
    let mut output = String::new();

    let name = if tool.name.trim().is_empty() {
        "Unknown Tool"
    } else {
        tool.name.as_str()
    };
    output.push_str(&format!("### {}\n\n", name));

    let description = if tool.description.trim().is_empty() {
        "No description available"
    } else {
        tool.description.as_str()
    };
    output.push_str(&format!("**Description:** {}  \n", description));
    output.push_str(&format!("**Category:** `{}`  \n", tool.display_category()));

    if let Some(day) = tool.launch_day() {
        output.push_str(&format!("**Launched:** {}  \n", day.format("%Y-%m-%d")));
    } else if !tool.launch_date.trim().is_empty() {
        output.push_str(&format!("**Launched:** {}  \n", tool.launch_date.trim()));
    }

    let source = if tool.source.trim().is_empty() {
        "unknown"
    } else {
        tool.source.as_str()
    };
    output.push_str(&format!("**Source:** `{}`  \n", source));

    if tool.url.trim().is_empty() {
        output.push_str("No URL available\n");
    } else {
        output.push_str(&format!("[Visit Tool]({})\n", tool.url.trim()));
    }

    output
}

/// Render a list of tools with a count header
pub fn render_tools(tools: &[Tool]) -> String {
    if tools.is_empty() {
        return "No tools found. Try a different category or search term.".to_string();
    }

    let mut output = format!("## Found {} tool(s)\n\n", tools.len());
    for tool in tools {
        output.push_str(&render_tool(tool));
        output.push_str("\n---\n\n");
    }

    output.trim_end().to_string()
}

/// Render a chat answer: summary followed by the tool cards
pub fn render_answer(answer: &ChatAnswer) -> String {
    if answer.tools.is_empty() {
        return answer.summary.clone();
    }

    format!("{}\n\n---\n\n{}", answer.summary, render_tools(&answer.tools))
}
