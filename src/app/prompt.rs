use crate::domain::model::Sex;
use crate::utils::error::{DeathClockError, Result};
use crate::utils::validation::{parse_birthday, parse_sex_choice, title_case};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub const NAME_PROMPT: &str = "Please enter your name: ";
pub const BIRTHDAY_PROMPT: &str = "Enter your birthday (mm/dd/yyyy): ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter 1, 2, or 3.";
pub const INVALID_DATE: &str = "Invalid date format. Please use mm/dd/yyyy.";

/// Line-oriented question and answer over any reader/writer pair.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self, what: &str) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DeathClockError::InputClosed {
                prompt: what.to_string(),
            });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_name(&mut self) -> Result<String> {
        self.ask(NAME_PROMPT)?;
        let line = self.read_line("name")?;
        Ok(title_case(line.trim()))
    }

    /// 顯示選單，輸入錯誤時無限次重新詢問
    pub fn ask_sex(&mut self) -> Result<Sex> {
        self.say("Please select your gender:")?;
        self.say("1. Male")?;
        self.say("2. Female")?;
        self.say("3. Not Specified")?;

        loop {
            let line = self.read_line("gender")?;
            match parse_sex_choice(&line) {
                Ok(sex) => return Ok(sex),
                Err(e) => {
                    tracing::debug!("Rejected gender input: {}", e);
                    self.say(INVALID_CHOICE)?;
                }
            }
        }
    }

    pub fn ask_birthday(&mut self) -> Result<NaiveDate> {
        loop {
            self.ask(BIRTHDAY_PROMPT)?;
            let line = self.read_line("birthday")?;
            match parse_birthday(&line) {
                Ok(date) => return Ok(date),
                Err(e) => {
                    tracing::debug!("Rejected birthday input: {}", e);
                    self.say(INVALID_DATE)?;
                }
            }
        }
    }
}
