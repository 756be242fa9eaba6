use serde::Deserialize;

#[derive(Deserialize)]
pub struct ChatPayload {
    #[serde(rename = "userInput")]
    pub user_input: String,
}
