use std::{
    collections::BTreeMap,
    fmt, io,
    path::{Path, PathBuf},
};

use secrecy::SecretString;
use tokio::{fs, io::AsyncWriteExt, sync::RwLock};

/// Device-local secret storage, a JSON object of name to value on disk.
///
/// The whole map is loaded on open and every mutation is written through
/// before it becomes visible to readers.
pub struct KeyStore {
    path: PathBuf,
    items: RwLock<BTreeMap<String, String>>,
}

impl fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl KeyStore {
    pub async fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();

        let items: BTreeMap<String, String> = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };

        tracing::debug!("opened key store at {:?} with {} items", path, items.len());

        Ok(Self {
            path,
            items: RwLock::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_item(&self, name: &str) -> Option<SecretString> {
        self.items
            .read()
            .await
            .get(name)
            .map(|value| SecretString::from(value.clone()))
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.items.read().await.contains_key(name)
    }

    /// Stores every pair in a single write, so either all land or none do.
    pub async fn set_items(&self, pairs: &[(&str, &str)]) -> io::Result<()> {
        let mut items = self.items.write().await;

        let mut next = items.clone();
        for (name, value) in pairs {
            next.insert(name.to_string(), value.to_string());
        }

        self.persist(&next).await?;
        *items = next;

        Ok(())
    }

    pub async fn remove_items(&self, names: &[&str]) -> io::Result<()> {
        let mut items = self.items.write().await;

        if !names.iter().any(|name| items.contains_key(*name)) {
            return Ok(());
        }

        let mut next = items.clone();
        for name in names {
            next.remove(*name);
        }

        self.persist(&next).await?;
        *items = next;

        Ok(())
    }

    async fn persist(&self, items: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(items)?;

        let tmp = self.tmp_path();

        // a stale temp file would keep its old permissions
        match fs::remove_file(&tmp).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
            _ => {}
        }

        let result = match write_private(&tmp, &bytes).await {
            Ok(_) => fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };

        if result.is_err() {
            let _ = fs::remove_file(&tmp).await;
        }

        result
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

/// Creates `path` readable by the owner only, then writes `bytes` to it.
async fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}
