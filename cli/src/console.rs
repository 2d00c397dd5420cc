//! Plain stdout/stderr element handles for one-shot questions.

use product_chat_core::{
    ChatElements, InputField, Message, MessageLog, Notice, NoticeArea, SubmitControl, SubmitState,
};

pub fn elements() -> ChatElements {
    ChatElements::new(ConsoleLog, ConsoleInput, ConsoleSubmit, ConsoleNotices)
}

struct ConsoleLog;

impl MessageLog for ConsoleLog {
    fn append(&self, message: &Message) {
        println!("{}", message.formatted_content());
    }

    fn show_typing(&self) {
        eprintln!("🤖 ...");
    }

    fn hide_typing(&self) {}

    // Output is already in order
    fn scroll_to_latest(&self) {}
}

/// The question comes from the command line, so there is nothing to clear or focus
struct ConsoleInput;

impl InputField for ConsoleInput {
    fn clear(&self) {}

    fn set_enabled(&self, _enabled: bool) {}

    fn focus(&self) {}
}

struct ConsoleSubmit;

impl SubmitControl for ConsoleSubmit {
    fn set_enabled(&self, _enabled: bool) {}

    fn show_state(&self, _state: SubmitState) {}
}

struct ConsoleNotices;

impl NoticeArea for ConsoleNotices {
    fn show(&self, notice: Notice) {
        eprintln!("! {}", notice.text);
    }
}
