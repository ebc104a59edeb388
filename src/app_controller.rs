use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::article_service::{ArticleService, SUBTITLE_EXTENSION};
use crate::file_utils::{FileManager, FileType};
use crate::storage::{ArticleRecord, ArticleRepository, StorageConnection};

// @module: Application controller for article creation and library management

/// Main application controller
///
/// Owns the configuration, the article service and the article repository.
/// The service produces records; the controller persists them explicitly
/// after each successful creation.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Article creation service
    service: ArticleService,

    // @field: Persistent article store
    repository: ArticleRepository,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = ArticleService::new(&config.generation)?;

        let repository = match &config.database_path {
            Some(path) => ArticleRepository::new(StorageConnection::new(path)?),
            None => ArticleRepository::new_default()?,
        };

        Ok(Self {
            config,
            service,
            repository,
        })
    }

    /// Create a controller from explicit parts (used by tests)
    pub fn with_parts(
        config: Config,
        service: ArticleService,
        repository: ArticleRepository,
    ) -> Self {
        Self {
            config,
            service,
            repository,
        }
    }

    /// Active provider name
    pub fn provider_name(&self) -> &str {
        self.config.generation.provider.display_name()
    }

    /// Convert a subtitle file or a directory of subtitle files into articles
    pub async fn run(&self, input_path: &Path) -> Result<()> {
        if input_path.is_file() {
            let record = self.convert_file(input_path).await?;
            Self::print_record_created(&record);
            Ok(())
        } else if input_path.is_dir() {
            self.run_folder(input_path).await
        } else {
            Err(anyhow!("Input path does not exist: {:?}", input_path))
        }
    }

    /// Convert every subtitle file found under a directory, continuing past
    /// per-file failures
    async fn run_folder(&self, input_dir: &Path) -> Result<()> {
        info!("Scanning directory for subtitle files: {:?}", input_dir);

        let files = FileManager::find_files(input_dir, SUBTITLE_EXTENSION)?;
        if files.is_empty() {
            warn!("No .{} files found in {:?}", SUBTITLE_EXTENSION, input_dir);
            return Ok(());
        }

        let mut processed_count = 0;

        for path in &files {
            info!("Processing subtitle file: {:?}", path);

            match self.convert_file(path).await {
                Ok(record) => {
                    Self::print_record_created(&record);
                    processed_count += 1;
                }
                Err(e) => {
                    error!("Error processing file {:?}: {}", path, e);
                }
            }
        }

        info!("Finished processing {} of {} files", processed_count, files.len());

        Ok(())
    }

    /// Convert a single subtitle file and persist the resulting article
    async fn convert_file(&self, input_file: &Path) -> Result<ArticleRecord> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Content sniff is advisory only; the service enforces the extension
        if FileManager::detect_file_type(input_file)? != FileType::Subtitle {
            debug!("File content does not look like SRT: {:?}", input_file);
        }

        let file_name = input_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let raw_text = FileManager::read_to_string(input_file)?;

        let record = self
            .service
            .create_article(&file_name, &raw_text)
            .await
            .map_err(|e| anyhow!(e.user_message()))?;

        // Persist only after a fully successful creation
        self.repository.insert_article(&record).await?;

        Ok(record)
    }

    /// List all stored articles, newest first
    pub async fn list(&self) -> Result<()> {
        let articles = self.repository.list_articles().await?;

        if articles.is_empty() {
            info!("No articles stored yet");
            return Ok(());
        }

        println!("{:<15} {:<22} {:<28} TITLE", "ID", "CREATED", "SOURCE");
        for article in &articles {
            println!(
                "{:<15} {:<22} {:<28} {}",
                article.id,
                &article.created_at[..article.created_at.len().min(19)],
                article.file_name,
                article.title
            );
        }

        Ok(())
    }

    /// Print a stored article by its identity
    pub async fn show(&self, article_id: &str) -> Result<()> {
        let article = self
            .repository
            .get_article(article_id)
            .await?
            .ok_or_else(|| anyhow!("No article found with id {}", article_id))?;

        println!("# {}", article.title);
        println!();
        println!("Source: {} ({})", article.file_name, article.created_at);
        println!();
        println!("{}", article.summary);
        println!();
        println!("{}", article.content);

        Ok(())
    }

    /// Delete a stored article by its identity
    pub async fn delete(&self, article_id: &str) -> Result<()> {
        let removed = self.repository.delete_article(article_id).await?;

        if removed {
            info!("Deleted article {}", article_id);
            Ok(())
        } else {
            Err(anyhow!("No article found with id {}", article_id))
        }
    }

    fn print_record_created(record: &ArticleRecord) {
        info!(
            "Created article {} from {}: {}",
            record.id, record.file_name, record.title
        );
    }
}
