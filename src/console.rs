use lazy_static::lazy_static;
use std::{collections::VecDeque, sync::Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// One console line. Identical consecutive lines are collapsed into a single
/// entry with a repeat count.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: Level,
    pub message: String,
    pub repeat_count: u32,
}

impl std::fmt::Display for ConsoleMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.repeat_count > 1 {
            write!(f, "({}x) ", self.repeat_count)?;
        }
        match self.level {
            Level::Info => {}
            Level::Warning => write!(f, "warning: ")?,
            Level::Error => write!(f, "error: ")?,
        }
        write!(f, "{}", self.message)
    }
}

pub const MAX_LOGS_COUNT: usize = 300;

struct Logger {
    messages: VecDeque<ConsoleMessage>,
}

impl Logger {
    fn new() -> Self {
        Self {
            messages: VecDeque::new(),
        }
    }

    fn log(&mut self, level: Level, message: String) {
        if let Some(last) = self.messages.back_mut()
            && last.level == level
            && last.message == message
        {
            last.repeat_count += 1;
            return;
        }
        self.messages.push_back(ConsoleMessage {
            level,
            message,
            repeat_count: 1,
        });
        while self.messages.len() > MAX_LOGS_COUNT {
            self.messages.pop_front();
        }
    }
}

lazy_static! {
    static ref LOGGER: Mutex<Logger> = Mutex::new(Logger::new());
}

pub fn print_info(msg: String) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.log(Level::Info, msg);
    }
}

pub fn print_warn(msg: String) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.log(Level::Warning, msg);
    }
}

pub fn print_err(msg: String) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.log(Level::Error, msg);
    }
}

/// Drains the queued messages. The main loop calls this once per frame and
/// prints each line to stdout.
pub fn consume_logs<F>(f: F)
where
    F: FnMut(ConsoleMessage),
{
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    logger.messages.drain(..).for_each(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_duplicates_are_collapsed() {
        let mut logger = Logger::new();
        logger.log(Level::Error, "boom".to_string());
        logger.log(Level::Error, "boom".to_string());
        logger.log(Level::Error, "boom".to_string());
        logger.log(Level::Info, "ok".to_string());

        assert_eq!(logger.messages.len(), 2);
        assert_eq!(logger.messages[0].repeat_count, 3);
        assert_eq!(logger.messages[0].to_string(), "(3x) error: boom");
        assert_eq!(logger.messages[1].to_string(), "ok");
    }

    #[test]
    fn same_text_different_level_is_not_collapsed() {
        let mut logger = Logger::new();
        logger.log(Level::Info, "line".to_string());
        logger.log(Level::Warning, "line".to_string());
        assert_eq!(logger.messages.len(), 2);
    }

    #[test]
    fn queue_is_bounded() {
        let mut logger = Logger::new();
        for i in 0..(MAX_LOGS_COUNT + 50) {
            logger.log(Level::Info, format!("message {i}"));
        }
        assert_eq!(logger.messages.len(), MAX_LOGS_COUNT);
        assert_eq!(logger.messages[0].message, "message 50");
    }
}
