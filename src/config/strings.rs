use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Greeting and result message templates, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageTemplates {
    pub greeting_messages: Vec<String>,
    pub life_expectancy_responses: Vec<String>,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            greeting_messages: vec![
                "Hey {name}, welcome to your life journey!".to_string(),
                "Nice to meet you, {name}! Let's explore your potential lifespan.".to_string(),
                "Greetings, {name}! Ready to peek into your future?".to_string(),
            ],
            life_expectancy_responses: vec![
                "This is your incept date. LOL! {date} ({dayOfWeek})".to_string(),
                "Your journey ends on {date}, a {dayOfWeek}. Buckle up!".to_string(),
                "Mark your calendar: {date} ({dayOfWeek}) is the big day!".to_string(),
            ],
        }
    }
}

impl MessageTemplates {
    /// 載入設定檔，不存在時先寫入預設值
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Strings file {} not found, writing defaults", path.display());
            Self::default().save(path)?;
        }
        Self::from_file(path)
    }

    /// 從 JSON 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let templates: Self = serde_json::from_str(content)?;
        templates.validate()?;
        Ok(templates)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Validate for MessageTemplates {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("GreetingMessages", &self.greeting_messages)?;
        validate_non_empty_list("LifeExpectancyResponses", &self.life_expectancy_responses)?;
        Ok(())
    }
}
