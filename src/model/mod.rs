mod column;
mod task;

pub use column::{TaskList, ROW_HEIGHT};
pub use task::{sample_tasks, Task, TaskStatus};
