use crate::email::application::ports::outgoing::email_sender::{EmailSendError, EmailSender};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct OutboxMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// In-process outbox. Can be told to refuse the next `n` sends so delivery
/// retries can be exercised.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    outbox: Arc<Mutex<Vec<OutboxMessage>>>,
    failures_left: Arc<Mutex<u32>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(n: u32) -> Self {
        let sender = Self::default();
        *sender.failures_left.lock().unwrap() = n;
        sender
    }

    pub fn outbox(&self) -> Vec<OutboxMessage> {
        self.outbox.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError> {
        {
            let mut failures = self.failures_left.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(EmailSendError::TransportFailed("relay refused".to_string()));
            }
        }

        self.outbox.lock().unwrap().push(OutboxMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
