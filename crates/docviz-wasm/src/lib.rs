//! WASM bindings for document text analysis.
//!
//! A browser page uploads a document, picks an operation and receives PNG
//! bytes ready to display or download as `plot.png`.

use wasm_bindgen::prelude::*;

use docviz_core::render::font;
use docviz_core::{
    loader, AnalysisRequest, DocvizConfig, NormalizeOptions, Operation, Pipeline, PipelineOutput,
    Renderer, UploadedDocument, PLOT_FILE_NAME, PLOT_MIME_TYPE,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// File name to offer for download.
#[wasm_bindgen(js_name = fileName)]
pub fn file_name() -> String {
    PLOT_FILE_NAME.to_string()
}

/// MIME type of the rendered image.
#[wasm_bindgen(js_name = mimeType)]
pub fn mime_type() -> String {
    PLOT_MIME_TYPE.to_string()
}

/// Extract the text of a document as `{ text, warnings }`.
#[wasm_bindgen(js_name = extractText)]
pub fn extract_text(bytes: &[u8], media_type: &str) -> Result<JsValue, JsValue> {
    let extracted = loader::load_with_media_type(bytes, media_type).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&extracted).map_err(to_js)
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Analyzer holding the options picked in the page's sidebar.
#[wasm_bindgen]
pub struct DocumentAnalyzer {
    operation: Operation,
    options: NormalizeOptions,
    max_words: usize,
    max_bigrams: usize,
    pipeline: Pipeline,
}

#[wasm_bindgen]
impl DocumentAnalyzer {
    /// Create an analyzer that labels charts with the bundled font.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DocumentAnalyzer, JsValue> {
        let config = DocvizConfig::default();
        let renderer = Renderer::bundled(&config.render).map_err(to_js)?;
        Ok(Self {
            operation: Operation::default(),
            options: NormalizeOptions {
                remove_stopwords: config.analysis.remove_stopwords,
                case_sensitive: config.analysis.case_sensitive,
            },
            max_words: config.analysis.max_words,
            max_bigrams: config.analysis.max_bigrams,
            pipeline: Pipeline::with_renderer(config, renderer),
        })
    }

    /// Select the operation by name, e.g. "word-cloud" or "sentiment".
    #[wasm_bindgen(js_name = setOperation)]
    pub fn set_operation(&mut self, name: &str) -> Result<(), JsValue> {
        self.operation = name.parse().map_err(|e: String| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Current operation label.
    #[wasm_bindgen(getter)]
    pub fn operation(&self) -> String {
        self.operation.label().to_string()
    }

    #[wasm_bindgen(js_name = setRemoveStopwords)]
    pub fn set_remove_stopwords(&mut self, remove: bool) {
        self.options.remove_stopwords = remove;
    }

    #[wasm_bindgen(js_name = setCaseSensitive)]
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.options.case_sensitive = case_sensitive;
    }

    #[wasm_bindgen(js_name = setMaxWords)]
    pub fn set_max_words(&mut self, max_words: usize) {
        self.max_words = max_words;
    }

    #[wasm_bindgen(js_name = setMaxBigrams)]
    pub fn set_max_bigrams(&mut self, max_bigrams: usize) {
        self.max_bigrams = max_bigrams;
    }

    /// Replace the bundled label font.
    #[wasm_bindgen(js_name = setFont)]
    pub fn set_font(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let font = font::from_bytes(bytes.to_vec()).map_err(to_js)?;
        let config = self.pipeline.config().clone();
        let renderer = Renderer::with_font(&config.render, font);
        self.pipeline = Pipeline::with_renderer(config, renderer);
        Ok(())
    }

    /// Run the selected analysis and return PNG bytes.
    pub fn analyze(&self, bytes: &[u8], media_type: &str) -> Result<Vec<u8>, JsValue> {
        Ok(self.run(bytes, media_type)?.image.png)
    }

    /// Run the selected analysis and return `{ analysis, warnings }`.
    #[wasm_bindgen(js_name = analyzeSummary)]
    pub fn analyze_summary(&self, bytes: &[u8], media_type: &str) -> Result<JsValue, JsValue> {
        let output = self.run(bytes, media_type)?;

        #[derive(serde::Serialize)]
        struct Summary {
            analysis: docviz_core::Analysis,
            warnings: Vec<String>,
        }

        let summary = Summary {
            analysis: output.analysis,
            warnings: output.extracted.warnings,
        };
        serde_wasm_bindgen::to_value(&summary).map_err(to_js)
    }
}

impl DocumentAnalyzer {
    fn run(&self, bytes: &[u8], media_type: &str) -> Result<PipelineOutput, JsValue> {
        let document = UploadedDocument::from_media_type(bytes.to_vec(), media_type).map_err(to_js)?;
        let request = AnalysisRequest {
            document,
            operation: self.operation,
            options: self.options,
            max_words: self.max_words,
            max_bigrams: self.max_bigrams,
        };

        let output = self.pipeline.run(&request).map_err(to_js)?;
        for warning in &output.extracted.warnings {
            web_sys::console::warn_1(&JsValue::from_str(warning));
        }
        Ok(output)
    }
}
