use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};
use shared::{DestroyImageRequest, DestroyImageResponse, Error, ImageUploader, Result, UploadResponse};

pub struct HostedImageUploader {
    host_url: String,
    upload_preset: String,
}

impl HostedImageUploader {
    pub fn new(host_url: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            host_url: host_url.into(),
            upload_preset: upload_preset.into(),
        }
    }
}

fn js_error(message: &str, value: JsValue) -> Error {
    Error::upload(message, format!("{:?}", value))
}

#[async_trait(?Send)]
impl ImageUploader for HostedImageUploader {
    type File = File;

    async fn upload(&self, file: &File) -> Result<String> {
        let form = FormData::new().map_err(|e| js_error("Error uploading image", e))?;
        form.append_with_blob("file", file)
            .map_err(|e| js_error("Error uploading image", e))?;
        form.append_with_str("upload_preset", &self.upload_preset)
            .map_err(|e| js_error("Error uploading image", e))?;

        let response = Request::post(&format!("{}/image/upload", self.host_url))
            .body(form)
            .send()
            .await
            .map_err(|e| Error::upload("Error uploading image", e.to_string()))?;

        if !response.ok() {
            return Err(Error::upload("Error uploading image", format!("HTTP {}", response.status())));
        }

        let uploaded: UploadResponse = response.json().await
            .map_err(|e| Error::upload("Error uploading image", e.to_string()))?;
        Ok(uploaded.secure_url)
    }

    async fn destroy_asset(&self, public_id: &str) -> Result<()> {
        let body = DestroyImageRequest { public_id: public_id.to_string() };
        let response = Request::post(&format!("{}/image/destroy", self.host_url))
            .json(&body)
            .map_err(|e| Error::upload("Error deleting image", e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::upload("Error deleting image", e.to_string()))?;

        if !response.ok() {
            return Err(Error::upload("Error deleting image", format!("HTTP {}", response.status())));
        }

        let answer: DestroyImageResponse = response.json().await
            .map_err(|e| Error::upload("Error deleting image", e.to_string()))?;
        match answer.result.as_str() {
            "ok" => Ok(()),
            other => Err(Error::upload("Error deleting image", other)),
        }
    }
}
