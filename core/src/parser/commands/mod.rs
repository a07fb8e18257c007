mod add;
mod add_task;
mod delete;
mod delete_task;
mod find;
mod note;
mod tag;
mod update;
mod update_task;
mod view;

pub use add::AddCommandParser;
pub use add_task::AddTaskCommandParser;
pub use delete::DeleteCommandParser;
pub use delete_task::DeleteTaskCommandParser;
pub use find::FindCommandParser;
pub use note::NoteCommandParser;
pub use tag::TagCommandParser;
pub use update::UpdateCommandParser;
pub use update_task::UpdateTaskCommandParser;
pub use view::ViewCommandParser;
