mod test_scheduler;
mod test_state;
mod test_widget;
