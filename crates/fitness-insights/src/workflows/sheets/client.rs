use super::loader::SheetSource;
use super::SheetImportError;
use crate::config::SheetsConfig;
use crate::workflows::candidates::CandidateRecord;
use std::fmt;
use std::future::Future;
use urlencoding::encode;

/// Fetches the public CSV export of a sheet.
#[derive(Debug, Clone)]
pub struct SheetsCsvClient {
    http: reqwest::Client,
    url: String,
}

impl SheetsCsvClient {
    pub fn new(http: reqwest::Client, base_url: &str, sheet_id: &str, gid: &str) -> Self {
        let url = format!(
            "{}/spreadsheets/d/{}/export?format=csv&gid={}",
            base_url.trim_end_matches('/'),
            encode(sheet_id),
            encode(gid)
        );
        Self { http, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SheetSource for SheetsCsvClient {
    fn describe(&self) -> String {
        format!("csv export {}", self.url)
    }

    fn fetch_records(
        &self,
    ) -> impl Future<Output = Result<Vec<CandidateRecord>, SheetImportError>> + Send {
        async move {
            let body = fetch_text(&self.http, &self.url).await?;
            super::SheetImporter::from_reader(body.as_bytes())
        }
    }
}

/// Reads a value range through the Sheets API v4 using an API key.
#[derive(Clone)]
pub struct SheetsApiClient {
    http: reqwest::Client,
    endpoint: String,
    url: String,
}

impl SheetsApiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        sheet_id: &str,
        range: &str,
        api_key: &str,
    ) -> Self {
        let endpoint = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            base_url.trim_end_matches('/'),
            encode(sheet_id),
            encode(range)
        );
        let url = format!("{endpoint}?key={}", encode(api_key));
        Self {
            http,
            endpoint,
            url,
        }
    }
}

impl fmt::Debug for SheetsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsApiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SheetSource for SheetsApiClient {
    fn describe(&self) -> String {
        format!("sheets api {}", self.endpoint)
    }

    fn fetch_records(
        &self,
    ) -> impl Future<Output = Result<Vec<CandidateRecord>, SheetImportError>> + Send {
        async move {
            let body = fetch_text(&self.http, &self.url).await?;
            super::SheetImporter::from_values_json(&body)
        }
    }
}

/// Transport errors are stripped of their url: the API variant carries the key
/// in its query string and these errors reach logs and response bodies.
async fn fetch_text(http: &reqwest::Client, url: &str) -> Result<String, SheetImportError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|err| SheetImportError::Fetch(err.without_url()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(SheetImportError::Status(status));
    }

    response
        .text()
        .await
        .map_err(|err| SheetImportError::Fetch(err.without_url()))
}

/// Remote source chosen from configuration: the API client when a key is
/// present, the CSV export otherwise.
#[derive(Debug, Clone)]
pub enum SheetClient {
    Csv(SheetsCsvClient),
    Api(SheetsApiClient),
    Disabled,
}

impl SheetClient {
    pub fn from_config(config: &SheetsConfig) -> Result<Self, SheetImportError> {
        let Some(sheet_id) = config.sheet_id.as_deref() else {
            return Ok(Self::Disabled);
        };

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(match config.api_key.as_deref() {
            Some(api_key) => Self::Api(SheetsApiClient::new(
                http,
                &config.api_base_url,
                sheet_id,
                &config.range,
                api_key,
            )),
            None => Self::Csv(SheetsCsvClient::new(
                http,
                &config.export_base_url,
                sheet_id,
                &config.gid,
            )),
        })
    }
}

impl SheetSource for SheetClient {
    fn describe(&self) -> String {
        match self {
            Self::Csv(client) => client.describe(),
            Self::Api(client) => client.describe(),
            Self::Disabled => "no sheet configured".to_string(),
        }
    }

    fn fetch_records(
        &self,
    ) -> impl Future<Output = Result<Vec<CandidateRecord>, SheetImportError>> + Send {
        async move {
            match self {
                Self::Csv(client) => client.fetch_records().await,
                Self::Api(client) => client.fetch_records().await,
                Self::Disabled => Err(SheetImportError::NotConfigured),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_export_url_targets_sheet_and_gid() {
        let client = SheetsCsvClient::new(
            reqwest::Client::new(),
            "https://docs.google.com/",
            "sheet-123",
            "7",
        );
        assert_eq!(
            client.url(),
            "https://docs.google.com/spreadsheets/d/sheet-123/export?format=csv&gid=7"
        );
    }

    #[test]
    fn api_client_description_hides_key() {
        let client = SheetsApiClient::new(
            reqwest::Client::new(),
            "https://sheets.googleapis.com",
            "sheet-123",
            "Sheet1!A:C",
            "secret-key",
        );
        let description = client.describe();
        assert!(description.contains("/v4/spreadsheets/sheet-123/values/Sheet1%21A%3AC"));
        assert!(!description.contains("secret-key"));
        assert!(!format!("{client:?}").contains("secret-key"));
    }

    #[test]
    fn url_parts_are_percent_encoded() {
        let csv = SheetsCsvClient::new(
            reqwest::Client::new(),
            "https://docs.google.com",
            "sheet/123",
            "0&format=html",
        );
        assert_eq!(
            csv.url(),
            "https://docs.google.com/spreadsheets/d/sheet%2F123/export?format=csv&gid=0%26format%3Dhtml"
        );

        let api = SheetsApiClient::new(
            reqwest::Client::new(),
            "https://sheets.googleapis.com",
            "sheet-123",
            "Candidates #2!A:C",
            "k&ey",
        );
        assert_eq!(
            api.url,
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/Candidates%20%232%21A%3AC?key=k%26ey"
        );
    }

    #[test]
    fn config_selects_client_flavor() {
        let mut config = SheetsConfig::default();
        assert!(matches!(
            SheetClient::from_config(&config).expect("client"),
            SheetClient::Csv(_)
        ));

        config.api_key = Some("key".to_string());
        assert!(matches!(
            SheetClient::from_config(&config).expect("client"),
            SheetClient::Api(_)
        ));

        config.sheet_id = None;
        assert!(matches!(
            SheetClient::from_config(&config).expect("client"),
            SheetClient::Disabled
        ));
    }
}
