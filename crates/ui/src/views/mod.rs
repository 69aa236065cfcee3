mod greeting;
mod quiz;
mod result_dialog;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use greeting::GreetingView;
pub use quiz::QuizView;
pub use result_dialog::ResultDialog;
pub use state::ViewError;
