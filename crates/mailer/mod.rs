pub mod zeptomail_client;
