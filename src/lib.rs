/*!
 * # Subpress - Subtitles to Articles with AI
 *
 * A Rust library for turning subtitle transcript files into formatted
 * long-form articles using a generative language service.
 *
 * ## Features
 *
 * - Normalize SRT subtitle files into clean prose transcripts
 * - Generate structured articles (title, summary, content) using:
 *   - Google Gemini API
 *   - Ollama (local LLM)
 * - Classified error taxonomy with automatic retry on rate limits
 * - Persistent local article library backed by SQLite
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Subtitle text extraction and normalization
 * - `article_service`: Validation, generation orchestration and retry policy
 * - `providers`: Client implementations for generation backends:
 *   - `providers::gemini`: Gemini API client
 *   - `providers::ollama`: Ollama API client
 *   - `providers::mock`: Scripted behaviors for testing
 * - `storage`: SQLite-backed article persistence
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod article_service;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod storage;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use article_service::{ArticleService, MIN_TRANSCRIPT_CHARS};
pub use errors::{ArticleError, GenerationError};
pub use providers::{ArticleGenerator, GeneratedArticle};
pub use storage::{ArticleRecord, ArticleRepository};
pub use subtitle_processor::normalize;
