use crate::app::prompt::Prompter;
use crate::config::strings::MessageTemplates;
use crate::core::date_math::compute_target_date;
use crate::core::templates::{
    pick_message, render_template, DATE_TOKEN, DAY_OF_WEEK_TOKEN, NAME_TOKEN,
};
use crate::domain::model::{day_of_week, short_date, UserAnswer};
use crate::domain::ports::RandomSource;
use crate::utils::error::{DeathClockError, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the Life Expectancy Calculator!";

/// Walks the user through the questions and prints the verdict.
pub struct Session<'a, R: BufRead, W: Write, G: RandomSource> {
    prompter: Prompter<R, W>,
    templates: &'a MessageTemplates,
    rng: G,
}

impl<'a, R: BufRead, W: Write, G: RandomSource> Session<'a, R, W, G> {
    pub fn new(prompter: Prompter<R, W>, templates: &'a MessageTemplates, rng: G) -> Self {
        Self {
            prompter,
            templates,
            rng,
        }
    }

    pub fn prompter_mut(&mut self) -> &mut Prompter<R, W> {
        &mut self.prompter
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    pub fn collect_answer(&mut self) -> Result<UserAnswer> {
        let templates = self.templates;
        self.prompter.say(WELCOME)?;

        let name = self.prompter.ask_name()?;
        let greeting = self.pick(&templates.greeting_messages, "GreetingMessages")?;
        self.prompter
            .say(&render_template(&greeting, &[(NAME_TOKEN, name.as_str())]))?;

        let sex = self.prompter.ask_sex()?;
        let birth_date = self.prompter.ask_birthday()?;
        let birth_day = day_of_week(birth_date);
        self.prompter
            .say(&format!("You were born on a {}!", birth_day))?;

        let target_date = compute_target_date(birth_date, sex)?;
        let answer = UserAnswer {
            name,
            sex,
            birth_date,
            target_date,
        };
        tracing::info!(
            "Computed target date {} for sex {} born {}",
            target_date,
            sex,
            birth_date
        );

        let target_day = answer.target_day_of_week();
        let response = self.pick(
            &templates.life_expectancy_responses,
            "LifeExpectancyResponses",
        )?;
        self.prompter.say(&render_template(
            &response,
            &[
                (DATE_TOKEN, short_date(target_date).as_str()),
                (DAY_OF_WEEK_TOKEN, target_day.as_str()),
            ],
        ))?;

        self.prompter.say(&format!(
            "Your life is bookended by a {} and a {}!",
            birth_day, target_day
        ))?;

        Ok(answer)
    }

    fn pick(&mut self, messages: &[String], field: &str) -> Result<String> {
        pick_message(messages, &mut self.rng)
            .map(str::to_string)
            .ok_or_else(|| DeathClockError::ConfigError {
                message: format!("'{}' has no messages", field),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Sex;
    use chrono::NaiveDate;
    use std::io::Cursor;

    struct FirstIndex;

    impl RandomSource for FirstIndex {
        fn next_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_collect_answer_with_default_templates() {
        let templates = MessageTemplates::default();
        let input = Cursor::new(b"ada lovelace\n2\n01/04/1990\n".to_vec());
        let mut session = Session::new(Prompter::new(input, Vec::new()), &templates, FirstIndex);

        let answer = session.collect_answer().unwrap();
        assert_eq!(answer.name, "Ada Lovelace");
        assert_eq!(answer.sex, Sex::Female);
        assert_eq!(answer.target_date, NaiveDate::from_ymd_opt(2070, 1, 6).unwrap());

        let output = String::from_utf8(session.into_prompter().into_output()).unwrap();
        assert!(output.starts_with(WELCOME));
        assert!(output.contains("Hey Ada Lovelace, welcome to your life journey!"));
        assert!(output.contains("You were born on a Thursday!"));
        assert!(output.contains("This is your incept date. LOL! 1/6/2070 (Monday)"));
        assert!(output.contains("Your life is bookended by a Thursday and a Monday!"));
    }

    #[test]
    fn test_empty_templates_are_reported() {
        let templates = MessageTemplates {
            greeting_messages: vec![],
            life_expectancy_responses: vec!["x".to_string()],
        };
        let input = Cursor::new(b"bob\n".to_vec());
        let mut session = Session::new(Prompter::new(input, Vec::new()), &templates, FirstIndex);

        assert!(matches!(
            session.collect_answer(),
            Err(DeathClockError::ConfigError { .. })
        ));
    }
}
