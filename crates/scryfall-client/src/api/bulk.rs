//! Bulk-data descriptors and file downloads.

use std::path::{Path, PathBuf};

use reqwest::Response;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use scryfall_core::vocab::BulkDataKind;
use scryfall_core::{BulkData, Card, Ruling, ScryfallList};

use crate::client::{Params, ScryfallClient};
use crate::error::{ScryfallError, ScryfallResult};

impl ScryfallClient {
    /// Descriptors of every bulk file currently offered.
    pub async fn bulk_data(&self) -> ScryfallResult<Vec<BulkData>> {
        let first: ScryfallList<BulkData> = self.get_json("bulk-data", &Params::new()).await?;
        self.all_pages(first).await
    }

    pub async fn bulk_data_by_id(&self, id: Uuid) -> ScryfallResult<BulkData> {
        self.get_json(&format!("bulk-data/{id}"), &Params::new())
            .await
    }

    /// The descriptor of a bulk file by kind, e.g. `oracle_cards`.
    pub async fn bulk_data_by_kind(&self, kind: &BulkDataKind) -> ScryfallResult<BulkData> {
        self.get_json(&format!("bulk-data/{kind}"), &Params::new())
            .await
    }

    /// Stream a bulk file to `dest` and return the number of bytes written.
    ///
    /// The file is written next to `dest` under a `.part` name and renamed
    /// once complete, so `dest` never holds a truncated file. The `.part`
    /// file is removed if the download fails.
    pub async fn download_bulk_data(&self, bulk: &BulkData, dest: &Path) -> ScryfallResult<u64> {
        let mut response = self.start_download(&bulk.download_uri).await?;
        log::info!(
            "downloading {} ({} bytes) to {}",
            bulk.name,
            bulk.size,
            dest.display()
        );

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let part = part_path(dest);
        let written = match write_body(&mut response, &part).await {
            Ok(written) => written,
            Err(err) => {
                if let Err(cleanup) = tokio::fs::remove_file(&part).await {
                    log::warn!("could not remove {}: {cleanup}", part.display());
                }
                return Err(err);
            }
        };

        tokio::fs::rename(&part, dest).await?;
        log::info!("wrote {written} bytes to {}", dest.display());
        Ok(written)
    }

    /// Download a card bulk file and decode every card in it.
    pub async fn fetch_bulk_cards(&self, bulk: &BulkData) -> ScryfallResult<Vec<Card>> {
        if !bulk.kind.holds_cards() {
            return Err(ScryfallError::InvalidRequest(format!(
                "bulk file {:?} ({}) does not contain cards",
                bulk.name, bulk.kind
            )));
        }
        self.fetch_bulk(bulk).await
    }

    /// Download the rulings bulk file and decode it.
    pub async fn fetch_bulk_rulings(&self, bulk: &BulkData) -> ScryfallResult<Vec<Ruling>> {
        if bulk.kind != BulkDataKind::Rulings {
            return Err(ScryfallError::InvalidRequest(format!(
                "bulk file {:?} ({}) does not contain rulings",
                bulk.name, bulk.kind
            )));
        }
        self.fetch_bulk(bulk).await
    }

    async fn fetch_bulk<T: DeserializeOwned>(&self, bulk: &BulkData) -> ScryfallResult<Vec<T>> {
        let response = self.start_download(&bulk.download_uri).await?;
        let bytes = response.bytes().await?;
        decode_bulk(&bulk.download_uri, &bytes)
    }
}

/// Decode a bulk card file previously saved with
/// [`ScryfallClient::download_bulk_data`].
pub async fn read_bulk_cards(path: &Path) -> ScryfallResult<Vec<Card>> {
    let bytes = tokio::fs::read(path).await?;
    decode_bulk(&path.display().to_string(), &bytes)
}

fn decode_bulk<T: DeserializeOwned>(origin: &str, bytes: &[u8]) -> ScryfallResult<Vec<T>> {
    serde_json::from_slice(bytes).map_err(|e| ScryfallError::Parse {
        url: origin.to_string(),
        message: e.to_string(),
    })
}

async fn write_body(response: &mut Response, part: &Path) -> ScryfallResult<u64> {
    let mut file = tokio::fs::File::create(part).await?;
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}
