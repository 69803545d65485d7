use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Bounded chat log; the oldest messages drop off first
#[derive(Debug, Clone)]
pub struct History {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity: capacity.max(2),
        }
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(ChatMessage {
            role,
            content: content.into(),
        });
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_drops_oldest() {
        let mut history = History::new(3);
        history.push(Role::User, "one");
        history.push(Role::Assistant, "two");
        history.push(Role::User, "three");
        history.push(Role::Assistant, "four");

        let contents: Vec<_> = history.messages().into_iter().map(|m| m.content).collect();
        assert_eq!(contents, vec!["two", "three", "four"]);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let message = ChatMessage {
            role: Role::Assistant,
            content: "hi".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
