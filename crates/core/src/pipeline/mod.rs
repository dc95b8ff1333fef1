pub mod check_photo_use_case;
