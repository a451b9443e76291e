pub mod disk_scheduler;
pub mod head;
