pub struct Config {
    pub api_base_url: &'static str,
    /// Base URL of the hosted image service account.
    pub image_host_url: &'static str,
    pub upload_preset: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            image_host_url: "https://api.cloudinary.com/v1_1/dgqyuqa7p",
            upload_preset: "ml_default",
        }
    }
}

pub const CONFIG: Config = Config::new();
