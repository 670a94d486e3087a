pub mod membership_record;
