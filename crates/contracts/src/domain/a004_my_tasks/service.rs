#[derive(Debug, Clone, Copy, Default)]
pub struct MyTasks;

impl MyTasks {
    pub fn perform_multiple_tasks(&self) -> String {
        "Performing multiple tasks.".to_string()
    }
}

pub fn perform_multiple_tasks() -> String {
    MyTasks.perform_multiple_tasks()
}
