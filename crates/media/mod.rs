pub mod cloudinary_client;
