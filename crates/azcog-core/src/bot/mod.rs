//! Bot Framework Direct Line (v3) conversation client.

use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

use crate::config::BotConfig;
use crate::credentials::DirectLineSecret;
use crate::http::{HttpClient, HttpError, Request};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAccount {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    pub from: ChannelAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConversationStarted {
    conversation_id: String,
    #[serde(default)]
    stream_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActivitySet {
    #[serde(default)]
    activities: Vec<Activity>,
}

/// A finished exchange: the conversation id and every text the bot sent back.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub conversation_id: String,
    pub replies: Vec<String>,
}

pub struct DirectLineClient {
    secret: DirectLineSecret,
    base_url: String,
    user_id: String,
    reply_wait: Duration,
    http: HttpClient,
}

impl DirectLineClient {
    pub fn new(secret: DirectLineSecret, cfg: &BotConfig, http: HttpClient) -> Self {
        Self {
            secret,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            user_id: cfg.user_id.clone(),
            reply_wait: cfg.reply_wait(),
            http,
        }
    }

    fn authorized(&self, req: Request) -> Request {
        req.header("Authorization", format!("Bearer {}", self.secret.0))
    }

    /// Opens a new conversation and returns its id.
    pub fn start_conversation(&self) -> Result<String, HttpError> {
        let req = self.authorized(Request::post(format!("{}/conversations", self.base_url)));
        let started: ConversationStarted = self.http.send(&req)?.error_for_status()?.json()?;
        tracing::debug!(
            conversation = %started.conversation_id,
            stream = started.stream_url.is_some(),
            "conversation started"
        );
        Ok(started.conversation_id)
    }

    pub fn send_message(&self, conversation_id: &str, text: &str) -> Result<(), HttpError> {
        let activity = Activity {
            kind: "message".to_string(),
            from: ChannelAccount {
                id: self.user_id.clone(),
                name: None,
            },
            text: Some(text.to_string()),
        };
        let url = format!("{}/conversations/{}/activities", self.base_url, conversation_id);
        let req = self.authorized(Request::post(url)).json(&activity)?;
        self.http.send(&req)?.error_for_status()?;
        Ok(())
    }

    pub fn activities(&self, conversation_id: &str) -> Result<Vec<Activity>, HttpError> {
        let url = format!("{}/conversations/{}/activities", self.base_url, conversation_id);
        let req = self.authorized(Request::get(url));
        let set: ActivitySet = self.http.send(&req)?.error_for_status()?.json()?;
        Ok(set.activities)
    }

    /// Texts from activities not sent by this client's user.
    pub fn bot_replies(&self, activities: &[Activity]) -> Vec<String> {
        activities
            .iter()
            .filter(|a| a.from.id != self.user_id)
            .filter_map(|a| a.text.clone())
            .collect()
    }

    /// Start a conversation, send `message`, wait, and collect the bot's replies.
    ///
    /// `echo` receives a progress line once the conversation is open and once
    /// the message is sent.
    pub fn converse(
        &self,
        message: &str,
        echo: &mut dyn FnMut(&str),
    ) -> Result<Exchange, HttpError> {
        let conversation_id = self.start_conversation()?;
        echo(&format!("Conversation started. ID: {conversation_id}"));
        self.send_message(&conversation_id, message)?;
        echo(&format!("Message sent: {message}"));
        if !self.reply_wait.is_zero() {
            thread::sleep(self.reply_wait);
        }
        let activities = self.activities(&conversation_id)?;
        Ok(Exchange {
            replies: self.bot_replies(&activities),
            conversation_id,
        })
    }
}
