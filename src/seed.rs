//! Village import from a JSON seed file, run once at startup when the villages table is empty.

use crate::error::AppError;
use crate::models::NewVillage;
use crate::store::Registry;
use std::path::Path;

/// Read `[{"name": .., "state": ..}, ..]`. Blank names or states are rejected.
pub async fn load_villages(path: &Path) -> Result<Vec<NewVillage>, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))?;
    let villages: Vec<NewVillage> = serde_json::from_str(&raw)
        .map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))?;
    for (i, v) in villages.iter().enumerate() {
        if v.name.trim().is_empty() || v.state.trim().is_empty() {
            return Err(AppError::Seed(format!(
                "{}: entry {} needs a non-empty name and state",
                path.display(),
                i
            )));
        }
    }
    Ok(villages)
}

/// Insert `villages` in one batch unless the registry already has some. Returns how many were inserted.
/// A failed batch leaves the table empty, so the next startup retries the import.
pub async fn seed_villages(registry: &dyn Registry, villages: &[NewVillage]) -> Result<usize, AppError> {
    if !registry.list_villages().await?.is_empty() {
        tracing::info!("villages already present, skipping seed import");
        return Ok(0);
    }
    let inserted = registry.insert_villages(villages).await?;
    tracing::info!(count = inserted.len(), "imported seed villages");
    Ok(inserted.len())
}

pub async fn seed_from_file(registry: &dyn Registry, path: &Path) -> Result<usize, AppError> {
    let villages = load_villages(path).await?;
    seed_villages(registry, &villages).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRegistry;
    use std::io::Write;

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn imports_into_empty_registry_once() {
        let file = seed_file(
            r#"[{"name": "Mendha Lekha", "state": "Maharashtra"}, {"name": "Jamguda", "state": "Odisha"}]"#,
        );
        let registry = MemoryRegistry::new();
        assert_eq!(seed_from_file(&registry, file.path()).await.unwrap(), 2);
        assert_eq!(seed_from_file(&registry, file.path()).await.unwrap(), 0);

        let villages = registry.list_villages().await.unwrap();
        assert_eq!(villages.len(), 2);
        assert_eq!(villages[1].name, "Jamguda");
        assert_eq!(villages[1].state, "Odisha");
    }

    #[tokio::test]
    async fn rejects_malformed_files() {
        let registry = MemoryRegistry::new();
        let not_json = seed_file("villages: none");
        assert!(matches!(
            seed_from_file(&registry, not_json.path()).await,
            Err(AppError::Seed(_))
        ));
        let blank = seed_file(r#"[{"name": " ", "state": "Odisha"}]"#);
        assert!(matches!(
            seed_from_file(&registry, blank.path()).await,
            Err(AppError::Seed(_))
        ));
        assert!(registry.list_villages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_import_is_retried_on_next_run() {
        let registry = MemoryRegistry::new();
        let broken = vec![
            NewVillage { name: "Mendha Lekha".into(), state: "Maharashtra".into() },
            NewVillage { name: "Jamguda".into(), state: "".into() },
        ];
        assert!(seed_villages(&registry, &broken).await.is_err());
        assert!(registry.list_villages().await.unwrap().is_empty());

        let fixed = vec![
            NewVillage { name: "Mendha Lekha".into(), state: "Maharashtra".into() },
            NewVillage { name: "Jamguda".into(), state: "Odisha".into() },
        ];
        assert_eq!(seed_villages(&registry, &fixed).await.unwrap(), 2);
        assert_eq!(registry.list_villages().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_a_seed_error() {
        let registry = MemoryRegistry::new();
        let err = seed_from_file(&registry, Path::new("/nonexistent/villages.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("seed: /nonexistent/villages.json"));
    }
}
