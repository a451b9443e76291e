pub mod disk_scheduler;
