//! Data files the backends need, fetched once into a local cache.
//!
//! A resource is downloaded only when its file is missing. Downloads go to a
//! `.part` file next to the destination and are renamed into place after the
//! optional checksum matches, so a failed transfer never leaves a file that
//! looks cached.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use futures::StreamExt;
use log::{info, warn};
use sha2::{Digest, Sha256};
use tokio::io::AsyncWriteExt;
use tokio::sync::OnceCell;

use crate::config::{ResourceSettings, ResourceSpec};
use crate::consts::{WORDS_RESOURCE, format_number};
use crate::service::Service;
use crate::text::Lexicon;

pub struct ResourceStore {
    data_dir: PathBuf,
    catalog: Vec<ResourceSpec>,
    client: reqwest::Client,
}

impl ResourceStore {
    pub fn new(settings: &ResourceSettings) -> Self {
        Self {
            data_dir: settings.data_dir.clone(),
            catalog: settings.catalog.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub fn spec(&self, name: &str) -> Result<&ResourceSpec> {
        self.catalog
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| anyhow!("unknown resource: {name}"))
    }

    pub fn path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.data_dir.join(&self.spec(name)?.file))
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.path(name).is_ok_and(|p| p.is_file())
    }

    /// Path to a resource, downloading it first if it is not cached.
    pub async fn ensure(&self, name: &str) -> Result<PathBuf> {
        let spec = self.spec(name)?;
        let dest = self.data_dir.join(&spec.file);
        if dest.is_file() {
            info!("resource {name}: cached at {}", dest.display());
            return Ok(dest);
        }

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .with_context(|| format!("failed to create {}", self.data_dir.display()))?;

        let partial = dest.with_extension("part");
        if let Err(e) = self.download(spec, &partial).await {
            if let Err(cleanup) = tokio::fs::remove_file(&partial).await
                && cleanup.kind() != std::io::ErrorKind::NotFound
            {
                warn!("failed to remove {}: {cleanup}", partial.display());
            }
            return Err(e.context(format!("failed to download resource {name}")));
        }
        tokio::fs::rename(&partial, &dest)
            .await
            .with_context(|| format!("failed to move {} into place", partial.display()))?;
        Ok(dest)
    }

    async fn download(&self, spec: &ResourceSpec, partial: &Path) -> Result<()> {
        info!("resource {}: downloading {}", spec.name, spec.url);
        let resp = self.client.get(&spec.url).send().await?;
        if !resp.status().is_success() {
            bail!("{} answered {}", spec.url, resp.status());
        }

        let mut file = tokio::fs::File::create(partial)
            .await
            .with_context(|| format!("failed to create {}", partial.display()))?;
        let mut hasher = Sha256::new();
        let mut total: u64 = 0;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            hasher.update(&chunk);
            file.write_all(&chunk).await?;
            total += chunk.len() as u64;
        }
        file.flush().await?;

        let digest = format!("{:x}", hasher.finalize());
        if let Some(expected) = &spec.sha256
            && !expected.eq_ignore_ascii_case(&digest)
        {
            bail!("checksum mismatch: expected {expected}, got {digest}");
        }
        info!("resource {}: {} bytes", spec.name, format_number(total));
        Ok(())
    }
}

/// Once-only construction of the shared [`Service`]. Concurrent callers
/// wait for the same initialisation; later callers get the same instance.
pub struct Bootstrap {
    store: ResourceStore,
    service: OnceCell<Arc<Service>>,
}

impl Bootstrap {
    pub fn new(settings: &ResourceSettings) -> Self {
        Self {
            store: ResourceStore::new(settings),
            service: OnceCell::new(),
        }
    }

    pub async fn service(&self) -> Result<Arc<Service>> {
        self.service
            .get_or_try_init(|| async {
                let path = self.store.ensure(WORDS_RESOURCE).await?;
                let lexicon = tokio::task::spawn_blocking(move || Lexicon::load(&path))
                    .await
                    .context("word list loader panicked")??;
                info!("lexicon ready: {} words", format_number(lexicon.len() as u64));
                Ok::<_, anyhow::Error>(Arc::new(Service::with_lexicon(Arc::new(lexicon))))
            })
            .await
            .cloned()
    }

    pub fn is_ready(&self) -> bool {
        self.service.initialized()
    }

    pub fn store(&self) -> &ResourceStore {
        &self.store
    }
}
