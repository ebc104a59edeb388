/*!
 * Tests for the persistent article store
 */

use anyhow::Result;
use subpress::providers::GeneratedArticle;
use subpress::storage::{ArticleRecord, ArticleRepository};

fn make_record(tag: &str) -> ArticleRecord {
    ArticleRecord::new(
        GeneratedArticle {
            title: format!("Title {}", tag),
            summary: format!("Summary {}", tag),
            content: format!("<h2>Heading</h2><p>Body {}</p>", tag),
        },
        format!("{}.srt", tag),
        format!("1\n00:00:00,000 --> 00:00:01,000\n{}\n", tag),
    )
}

#[tokio::test]
async fn test_insertAndGet_shouldRoundTripRecord() -> Result<()> {
    let repo = ArticleRepository::new_in_memory()?;
    let record = make_record("a");

    repo.insert_article(&record).await?;

    let loaded = repo.get_article(&record.id).await?.expect("record should exist");
    assert_eq!(loaded.id, record.id);
    assert_eq!(loaded.title, record.title);
    assert_eq!(loaded.summary, record.summary);
    assert_eq!(loaded.content, record.content);
    assert_eq!(loaded.original_srt, record.original_srt);
    assert_eq!(loaded.file_name, record.file_name);
    assert_eq!(loaded.created_at, record.created_at);

    Ok(())
}

#[tokio::test]
async fn test_getArticle_withUnknownId_shouldReturnNone() -> Result<()> {
    let repo = ArticleRepository::new_in_memory()?;
    assert!(repo.get_article("12345").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_listArticles_shouldReturnNewestFirst() -> Result<()> {
    let repo = ArticleRepository::new_in_memory()?;

    let first = make_record("first");
    let second = make_record("second");
    let third = make_record("third");

    repo.insert_article(&first).await?;
    repo.insert_article(&second).await?;
    repo.insert_article(&third).await?;

    let listed = repo.list_articles().await?;
    let ids: Vec<&str> = listed.iter().map(|a| a.id.as_str()).collect();

    assert_eq!(ids, vec![&third.id, &second.id, &first.id]);

    Ok(())
}

#[tokio::test]
async fn test_deleteArticle_shouldRemoveExactlyOneAndPreserveOrder() -> Result<()> {
    let repo = ArticleRepository::new_in_memory()?;

    let first = make_record("first");
    let second = make_record("second");
    let third = make_record("third");

    repo.insert_article(&first).await?;
    repo.insert_article(&second).await?;
    repo.insert_article(&third).await?;

    assert!(repo.delete_article(&second.id).await?);

    assert_eq!(repo.count_articles().await?, 2);
    assert!(repo.get_article(&second.id).await?.is_none());

    // Remaining entries keep their relative order
    let listed = repo.list_articles().await?;
    let ids: Vec<&str> = listed.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec![&third.id, &first.id]);

    Ok(())
}

#[tokio::test]
async fn test_deleteArticle_withUnknownId_shouldReturnFalse() -> Result<()> {
    let repo = ArticleRepository::new_in_memory()?;
    let record = make_record("only");
    repo.insert_article(&record).await?;

    assert!(!repo.delete_article("999").await?);
    assert_eq!(repo.count_articles().await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_countArticles_shouldTrackInserts() -> Result<()> {
    let repo = ArticleRepository::new_in_memory()?;
    assert_eq!(repo.count_articles().await?, 0);

    repo.insert_article(&make_record("a")).await?;
    repo.insert_article(&make_record("b")).await?;

    assert_eq!(repo.count_articles().await?, 2);

    Ok(())
}
