use axum::{extract::Multipart, http::StatusCode};
use serde::de::DeserializeOwned;

/// One uploaded file part of a registration form.
pub struct UploadedFile {
    pub field_name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// A registration form submitted as multipart: JSON-valued text parts plus
/// file parts.
pub struct RegistrationForm {
    fields: serde_json::Map<String, serde_json::Value>,
    files: Vec<UploadedFile>,
}

impl RegistrationForm {
    pub async fn collect(mut multipart: Multipart) -> Result<Self, (StatusCode, String)> {
        let mut fields = serde_json::Map::new();
        let mut files = Vec::new();

        while let Some(field) = multipart.next_field().await.map_err(|err| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid multipart body: {}", err),
            )
        })? {
            let name = field.name().unwrap_or_default().to_string();

            if field.file_name().is_some() {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| {
                        (
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file part '{}': {}", name, err),
                        )
                    })?
                    .to_vec();

                files.push(UploadedFile {
                    field_name: name,
                    bytes,
                    content_type,
                });
            } else {
                let text = field.text().await.map_err(|err| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read field '{}': {}", name, err),
                    )
                })?;

                // Nested blocks arrive as JSON text, plain fields as strings.
                let value = serde_json::from_str(&text)
                    .unwrap_or(serde_json::Value::String(text));
                fields.insert(name, value);
            }
        }

        Ok(Self { fields, files })
    }

    /// Deserializes the collected text fields into the form's typed model.
    pub fn parse_fields<T: DeserializeOwned>(&self) -> Result<T, (StatusCode, String)> {
        serde_json::from_value(serde_json::Value::Object(self.fields.clone())).map_err(|err| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid form data: {}", err),
            )
        })
    }

    pub fn take_file(&mut self, field_name: &str) -> Result<UploadedFile, (StatusCode, String)> {
        let index = self
            .files
            .iter()
            .position(|file| file.field_name == field_name)
            .ok_or_else(|| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Missing file field '{}'", field_name),
                )
            })?;

        Ok(self.files.remove(index))
    }

    pub fn take_all_files(&mut self) -> Vec<UploadedFile> {
        std::mem::take(&mut self.files)
    }
}
