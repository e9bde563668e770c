use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// GraphQL response envelope for the `questionOfToday` query
#[derive(Debug, Deserialize, Clone)]
pub struct DailyEnvelope {
    pub data: Option<DailyData>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DailyData {
    #[serde(rename = "todayRecord")]
    pub today_record: Option<Vec<TodayRecord>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TodayRecord {
    pub question: Option<Question>,
}

/// Question fields as returned by the API
///
/// Every field is optional. The upstream omits fields freely and that is
/// not an error; absent values degrade to empty strings downstream.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_frontend_id: Option<String>,
    pub title_slug: Option<String>,
    pub translated_title: Option<String>,
    pub title: Option<String>,
    pub difficulty: Option<String>,
    pub translated_content: Option<String>,
}

/// Today's question with the fields the push message needs
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DailyQuestion {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub difficulty: String,
    pub content_html: String,
    pub url: String,
}

/// Markdown message payload accepted by the WeCom group robot
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WebhookPayload {
    pub msgtype: String,
    pub markdown: MarkdownBody,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MarkdownBody {
    pub content: String,
}

/// Reply returned by the webhook endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct WebhookReply {
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl WebhookReply {
    pub fn is_ok(&self) -> bool {
        self.errcode == 0
    }
}

/// Extract today's question from the GraphQL envelope
///
/// The translated title wins over the English one when both are present.
/// A missing or empty `todayRecord` is an error since there is nothing
/// to push; missing question fields are not.
pub fn extract_daily(envelope: DailyEnvelope, domain: &str) -> Result<DailyQuestion, String> {
    let record = envelope
        .data
        .and_then(|d| d.today_record)
        .and_then(|mut records| {
            if records.is_empty() {
                None
            } else {
                Some(records.remove(0))
            }
        })
        .ok_or_else(|| "No today record in the LeetCode response".to_string())?;

    let question = record
        .question
        .ok_or_else(|| "Today record carries no question".to_string())?;

    let slug = question.title_slug.unwrap_or_default();

    Ok(DailyQuestion {
        id: question.question_frontend_id.unwrap_or_default(),
        title: question.translated_title.or(question.title).unwrap_or_default(),
        difficulty: question.difficulty.unwrap_or_default(),
        content_html: question.translated_content.unwrap_or_default(),
        url: format!("{domain}/problems/{slug}"),
        slug,
    })
}

/// Assemble the chat message from the fixed template
///
/// Quoted header lines, then the formatted body, then the footer. The body
/// is expected to already be chat markdown (see [`crate::format`]).
pub fn build_message(question: &DailyQuestion, body_md: &str, date: NaiveDate) -> String {
    format!(
        "> **Problem**: {title}\n\
         > **Difficulty**: {difficulty}\n\
         > **Date**: {date}\n\
         > **Link**: [View problem]({url})\n\n\
         {body}\n\n\
         — pushed automatically from GitHub",
        title = question.title,
        difficulty = question.difficulty,
        date = date.format("%Y-%m-%d"),
        url = question.url,
        body = body_md,
    )
}

/// Wrap message content in the robot's markdown payload
///
/// The title is rendered as an `##` heading above the content, which is
/// what the robot displays as the card header.
pub fn build_payload(title: &str, content: &str) -> WebhookPayload {
    WebhookPayload {
        msgtype: "markdown".to_string(),
        markdown: MarkdownBody {
            content: format!("## {title}\n\n{content}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_from(json: &str) -> DailyEnvelope {
        serde_json::from_str(json).unwrap()
    }

    const FULL_ENVELOPE: &str = r#"{
        "data": {
            "todayRecord": [
                {
                    "question": {
                        "questionFrontendId": "1",
                        "titleSlug": "two-sum",
                        "translatedTitle": "两数之和",
                        "title": "Two Sum",
                        "difficulty": "Easy",
                        "translatedContent": "<p>body</p>"
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn test_extract_daily_full_envelope() {
        let envelope = envelope_from(FULL_ENVELOPE);
        let question = extract_daily(envelope, "https://leetcode.cn").unwrap();

        assert_eq!(question.id, "1");
        assert_eq!(question.slug, "two-sum");
        assert_eq!(question.title, "两数之和");
        assert_eq!(question.difficulty, "Easy");
        assert_eq!(question.content_html, "<p>body</p>");
        assert_eq!(question.url, "https://leetcode.cn/problems/two-sum");
    }

    #[test]
    fn test_extract_daily_title_fallback() {
        let envelope = envelope_from(
            r#"{"data":{"todayRecord":[{"question":{
                "titleSlug":"two-sum","title":"Two Sum","difficulty":"Easy"}}]}}"#,
        );
        let question = extract_daily(envelope, "https://leetcode.com").unwrap();

        assert_eq!(question.title, "Two Sum");
        assert_eq!(question.content_html, "");
        assert_eq!(question.id, "");
    }

    #[test]
    fn test_extract_daily_missing_fields_tolerated() {
        let envelope = envelope_from(r#"{"data":{"todayRecord":[{"question":{}}]}}"#);
        let question = extract_daily(envelope, "https://leetcode.cn").unwrap();

        assert_eq!(question.title, "");
        assert_eq!(question.difficulty, "");
        assert_eq!(question.url, "https://leetcode.cn/problems/");
    }

    #[test]
    fn test_extract_daily_no_data() {
        let envelope = envelope_from(r#"{"data":null}"#);
        let result = extract_daily(envelope, "https://leetcode.cn");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("No today record"));
    }

    #[test]
    fn test_extract_daily_empty_record_list() {
        let envelope = envelope_from(r#"{"data":{"todayRecord":[]}}"#);
        let result = extract_daily(envelope, "https://leetcode.cn");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("No today record"));
    }

    #[test]
    fn test_extract_daily_record_without_question() {
        let envelope = envelope_from(r#"{"data":{"todayRecord":[{"question":null}]}}"#);
        let result = extract_daily(envelope, "https://leetcode.cn");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("no question"));
    }

    #[test]
    fn test_build_message_template() {
        let question = DailyQuestion {
            id: "1".to_string(),
            slug: "two-sum".to_string(),
            title: "Two Sum".to_string(),
            difficulty: "Easy".to_string(),
            content_html: String::new(),
            url: "https://leetcode.cn/problems/two-sum".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

        let message = build_message(&question, "the body", date);

        assert!(message.starts_with("> **Problem**: Two Sum\n"));
        assert!(message.contains("> **Difficulty**: Easy\n"));
        assert!(message.contains("> **Date**: 2021-01-01\n"));
        assert!(message.contains("[View problem](https://leetcode.cn/problems/two-sum)"));
        assert!(message.contains("\n\nthe body\n\n"));
        assert!(message.ends_with("— pushed automatically from GitHub"));
    }

    #[test]
    fn test_build_payload_shape() {
        let payload = build_payload("Daily", "content here");

        assert_eq!(payload.msgtype, "markdown");
        assert_eq!(payload.markdown.content, "## Daily\n\ncontent here");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["msgtype"], "markdown");
        assert_eq!(json["markdown"]["content"], "## Daily\n\ncontent here");
    }

    #[test]
    fn test_webhook_reply_success() {
        let reply: WebhookReply = serde_json::from_str(r#"{"errcode":0,"errmsg":"ok"}"#).unwrap();
        assert!(reply.is_ok());
    }

    #[test]
    fn test_webhook_reply_failure() {
        let reply: WebhookReply =
            serde_json::from_str(r#"{"errcode":93000,"errmsg":"invalid webhook url"}"#).unwrap();
        assert!(!reply.is_ok());
        assert_eq!(reply.errmsg, "invalid webhook url");
    }

    #[test]
    fn test_webhook_reply_missing_errmsg() {
        let reply: WebhookReply = serde_json::from_str(r#"{"errcode":0}"#).unwrap();
        assert!(reply.is_ok());
        assert_eq!(reply.errmsg, "");
    }
}
