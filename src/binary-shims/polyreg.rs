extern crate polyreg_tasks;

fn main() { polyreg_tasks::entry_points::fit() }
