use super::{FieldErrors, require_text};
use crate::models::notifications::requests::NotificationRequest;

const TITLE_MAX: usize = 200;
const MESSAGE_MAX: usize = 5000;

pub fn validate_notification(req: &NotificationRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "title", &req.title, "Title", TITLE_MAX);
    require_text(&mut errors, "message", &req.message, "Message", MESSAGE_MAX);
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notifications::entities::{Audience, Priority};

    #[test]
    fn test_notification_bounds() {
        let req = NotificationRequest {
            title: "Half-term break".to_string(),
            message: "School closes on Friday.".to_string(),
            audience: Audience::All,
            priority: Priority::Normal,
            published: true,
        };
        assert!(validate_notification(&req).is_ok());

        let req = NotificationRequest {
            title: "x".repeat(TITLE_MAX + 1),
            message: String::new(),
            ..req
        };
        let err = validate_notification(&req).unwrap_err();
        assert!(err.contains("title"));
        assert_eq!(err.get("message"), Some("Message is required"));
    }
}
