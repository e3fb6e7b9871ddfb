use super::{
    notification::Notification,
    page_controller::PageState,
};

pub trait PageListener {
    fn on_state_changed(&self, _state: &PageState) {}
    fn on_notification(&self, _notification: &Notification) {}
}
