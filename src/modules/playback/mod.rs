pub mod shuffle_picker;
