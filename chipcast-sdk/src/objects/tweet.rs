use serde::{Deserialize, Serialize};

/// Body of `POST /2/tweets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTweetRequest {
    pub text: String,
}

/// Response of `POST /2/tweets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTweetResponse {
    pub data: TweetData,
}

/// The created tweet as echoed back by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetData {
    pub id: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tweet_response_parsing() {
        let json = r#"{"data":{"id":"1445880548472328192","text":"Chip #007 has been claimed by 0xABC."}}"#;
        let response: CreateTweetResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.id, "1445880548472328192");
        assert_eq!(response.data.text, "Chip #007 has been claimed by 0xABC.");
    }

    #[test]
    fn test_create_tweet_request_serialization() {
        let request = CreateTweetRequest {
            text: "Half way there! 12 left! 🤘".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"text":"Half way there! 12 left! 🤘"}"#);
    }
}
