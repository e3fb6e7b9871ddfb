use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

pub(crate) struct ShellPrompt {
    pub(crate) dialog: Option<&'static str>,
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        match self.dialog {
            Some(title) => format!("contacts [{}]$ ", title).into(),
            None => "contacts$ ".into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}
