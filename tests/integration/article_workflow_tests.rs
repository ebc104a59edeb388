/*!
 * End-to-end article creation workflow tests using mock providers and an
 * in-memory article store
 */

use std::sync::Arc;

use anyhow::Result;
use subpress::app_config::Config;
use subpress::app_controller::Controller;
use subpress::article_service::ArticleService;
use subpress::providers::mock::MockGenerator;
use subpress::storage::ArticleRepository;

use crate::common;

fn controller_with(generator: MockGenerator) -> Result<(Controller, ArticleRepository)> {
    let service = ArticleService::with_generator(Arc::new(generator), 3, 10);
    let repository = ArticleRepository::new_in_memory()?;
    let controller = Controller::with_parts(Config::default(), service, repository.clone());
    Ok((controller, repository))
}

#[tokio::test]
async fn test_run_withSubtitleFile_shouldCreateAndPersistArticle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let subtitle = common::create_test_subtitle(&root, "talk.srt")?;

    let (controller, repository) = controller_with(MockGenerator::working())?;

    controller.run(&subtitle).await?;

    let articles = repository.list_articles().await?;
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].file_name, "talk.srt");
    assert!(articles[0].content.contains("This is a test subtitle."));

    Ok(())
}

#[tokio::test]
async fn test_run_withDirectory_shouldConvertEverySubtitleFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();

    common::create_test_subtitle(&root, "one.srt")?;
    common::create_test_subtitle(&root, "two.srt")?;
    common::create_test_file(&root, "notes.txt", "not a subtitle")?;

    let (controller, repository) = controller_with(MockGenerator::working())?;

    controller.run(&root).await?;

    assert_eq!(repository.count_articles().await?, 2);

    Ok(())
}

#[tokio::test]
async fn test_run_withFailingGeneration_shouldLeaveStoreUntouched() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let subtitle = common::create_test_subtitle(&root, "talk.srt")?;

    let (controller, repository) = controller_with(MockGenerator::unavailable())?;

    let result = controller.run(&subtitle).await;

    assert!(result.is_err());
    assert_eq!(repository.count_articles().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_run_withTooShortSubtitle_shouldFailWithoutPersisting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let subtitle = common::create_test_file(
        &root,
        "short.srt",
        "1\n00:00:00,000 --> 00:00:01,000\nToo short.\n",
    )?;

    let (controller, repository) = controller_with(MockGenerator::working())?;

    let result = controller.run(&subtitle).await;

    assert!(result.is_err());
    assert_eq!(repository.count_articles().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_run_withMissingPath_shouldFail() -> Result<()> {
    let (controller, _repository) = controller_with(MockGenerator::working())?;

    let result = controller.run(std::path::Path::new("/nonexistent/talk.srt")).await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_delete_shouldRemoveStoredArticle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let subtitle = common::create_test_subtitle(&root, "talk.srt")?;

    let (controller, repository) = controller_with(MockGenerator::working())?;

    controller.run(&subtitle).await?;
    let id = repository.list_articles().await?[0].id.clone();

    controller.delete(&id).await?;
    assert_eq!(repository.count_articles().await?, 0);

    // Deleting again reports the missing record
    assert!(controller.delete(&id).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_rateLimitedGeneration_shouldRecoverAndPersist() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let subtitle = common::create_test_subtitle(&root, "talk.srt")?;

    let generator = MockGenerator::rate_limited_times(2);
    let (controller, repository) = controller_with(generator.clone())?;

    controller.run(&subtitle).await?;

    assert_eq!(generator.request_count(), 3);
    assert_eq!(repository.count_articles().await?, 1);

    Ok(())
}
