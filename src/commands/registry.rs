use serde::{Deserialize, Serialize};

use super::session::BrowseSession;
use crate::modules::browse::ListEvent;

/// Every request a host can send to a session, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Navigate { route: String },
    Dispatch { label: String, event: ListEvent },
    CurrentPage,
    CancelNavigation,
}

/// Run one command and serialize its reply. Errors become strings for the host.
pub async fn execute(session: &BrowseSession, command: Command) -> Result<serde_json::Value, String> {
    let reply = match command {
        Command::Navigate { route } => {
            let page = session.open(&route).await.map_err(|e| e.to_string())?;
            serde_json::to_value(page)
        }
        Command::Dispatch { label, event } => serde_json::to_value(session.dispatch(&label, event).await),
        Command::CurrentPage => serde_json::to_value(session.current_page().await),
        Command::CancelNavigation => {
            session.cancel_navigation().await;
            Ok(serde_json::Value::Null)
        }
    };
    reply.map_err(|e| e.to_string())
}

/// Parse and run one line of host input.
pub async fn execute_line(session: &BrowseSession, line: &str) -> Result<serde_json::Value, String> {
    let command: Command = serde_json::from_str(line).map_err(|e| format!("Invalid command: {}", e))?;
    execute(session, command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::browse::ScrollDirection;

    #[test]
    fn test_command_wire_format() {
        let command: Command = serde_json::from_str(
            r#"{"command":"dispatch","label":"Popular","event":{"type":"scroll","direction":"right"}}"#,
        )
        .unwrap();

        assert_eq!(
            command,
            Command::Dispatch {
                label: "Popular".to_string(),
                event: ListEvent::Scroll {
                    direction: ScrollDirection::Right
                },
            }
        );

        let navigate: Command = serde_json::from_str(r#"{"command":"navigate","route":"/"}"#).unwrap();
        assert_eq!(navigate, Command::Navigate { route: "/".to_string() });
    }

    #[test]
    fn test_pointer_event_wire_format() {
        let command: Command = serde_json::from_str(
            r#"{"command":"dispatch","label":"Latest","event":{"type":"pointer_enter","id":550}}"#,
        )
        .unwrap();
        assert!(matches!(
            command,
            Command::Dispatch {
                event: ListEvent::PointerEnter { .. },
                ..
            }
        ));
    }
}
