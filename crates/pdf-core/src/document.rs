//! PDF Document writer

use crate::font::{encode_text_hex, encode_text_string};
use crate::text::{generate_line_operators, generate_text_operators, TextRenderContext};
use crate::{Align, PdfError, Result};
use crate::{FontStyle, FontWeight, StandardFont};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    /// Mid gray
    pub fn gray() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Page dimensions in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// ISO A4 (210 x 297 mm)
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };

    /// US Letter (8.5 x 11 in)
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };

    /// Page size from millimetres
    pub fn from_mm(width: f64, height: f64) -> Self {
        Self {
            width: crate::mm_to_pt(width),
            height: crate::mm_to_pt(height),
        }
    }
}

/// PDF Document writer providing high-level operations
///
/// Content is buffered per page and written out in one stream per page
/// when the document is saved.
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Root Pages node
    pages_id: ObjectId,
    /// Page object IDs in order
    page_ids: Vec<ObjectId>,
    /// Content stream object ID per page
    content_ids: Vec<ObjectId>,
    /// Size used for every page
    page_size: PageSize,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font style
    current_style: FontStyle,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Current stroke color
    current_draw_color: Color,
    /// Current stroke width in points
    current_line_width: f64,
    /// Font dictionaries added to the document (font -> PDF object ID)
    embedded_fonts: BTreeMap<StandardFont, ObjectId>,
    /// Page font resources (page number -> font -> resource name)
    ///
    /// Ordered maps keep the written Resources identical between runs.
    page_font_resources: BTreeMap<usize, BTreeMap<StandardFont, String>>,
    /// Next font resource number
    next_font_resource: u32,
    /// Buffered content operators per page (page number -> operators)
    page_content_buffer: BTreeMap<usize, Vec<u8>>,
    /// Flate-compress content streams on save
    compress: bool,
    /// Document information entries (key -> value)
    info: Vec<(String, String)>,
    /// Info dictionary object, once written
    info_id: Option<ObjectId>,
}

impl PdfDocument {
    /// Create an empty document whose pages all share `page_size`
    ///
    /// # Example
    /// ```ignore
    /// let mut doc = PdfDocument::new(PageSize::A4);
    /// let page = doc.add_page();
    /// ```
    pub fn new(page_size: PageSize) -> Self {
        let mut inner = Document::with_version("1.5");

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Kids", Object::Array(vec![]));
        pages_dict.set("Count", Object::Integer(0));
        let pages_id = inner.add_object(Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = inner.add_object(Object::Dictionary(catalog));
        inner.trailer.set("Root", Object::Reference(catalog_id));

        Self {
            inner,
            pages_id,
            page_ids: Vec::new(),
            content_ids: Vec::new(),
            page_size,
            current_weight: FontWeight::default(),
            current_style: FontStyle::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            current_draw_color: Color::default(),
            current_line_width: 1.0,
            embedded_fonts: BTreeMap::new(),
            page_font_resources: BTreeMap::new(),
            next_font_resource: 1,
            page_content_buffer: BTreeMap::new(),
            compress: true,
            info: Vec::new(),
            info_id: None,
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Page dimensions in points
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Add a blank page to the end of the document
    ///
    /// # Returns
    /// New page number (1-indexed)
    pub fn add_page(&mut self) -> usize {
        let contents_id = self
            .inner
            .add_object(Object::Stream(Stream::new(Dictionary::new(), vec![])));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                self.page_size.width.into(),
                self.page_size.height.into(),
            ]),
        );
        page_dict.set("Resources", Object::Dictionary(Dictionary::new()));
        page_dict.set("Contents", Object::Reference(contents_id));
        let page_id = self.inner.add_object(Object::Dictionary(page_dict));

        self.page_ids.push(page_id);
        self.content_ids.push(contents_id);
        self.sync_page_tree();

        self.page_ids.len()
    }

    /// Rewrite Kids/Count of the root Pages node from `page_ids`
    fn sync_page_tree(&mut self) {
        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set(
            "Kids",
            Object::Array(self.page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        );
        pages_dict.set("Count", Object::Integer(self.page_ids.len() as i64));
        self.inner
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));
    }

    /// Set only the font size (keeps current weight/style)
    pub fn set_font_size(&mut self, size: f32) {
        self.current_font_size = size;
    }

    /// Set the font weight (keeps current size/style)
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.current_weight = weight;
    }

    /// Set the font style (keeps current size/weight)
    pub fn set_font_style(&mut self, style: FontStyle) {
        self.current_style = style;
    }

    /// Set the text color
    ///
    /// # Example
    /// ```ignore
    /// doc.set_text_color(Color::red());
    /// ```
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Set the stroke color used by `draw_line`
    pub fn set_draw_color(&mut self, color: Color) {
        self.current_draw_color = color;
    }

    /// Set the stroke width (points) used by `draw_line`
    pub fn set_line_width(&mut self, width: f64) {
        self.current_line_width = width;
    }

    /// Enable or disable Flate compression of content streams
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Set the document title (Info dictionary)
    pub fn set_title(&mut self, title: &str) {
        self.set_info("Title", title);
    }

    /// Set the producing application (Info dictionary)
    pub fn set_producer(&mut self, producer: &str) {
        self.set_info("Producer", producer);
    }

    fn set_info(&mut self, key: &str, value: &str) {
        self.info.retain(|(k, _)| k != key);
        self.info.push((key.to_string(), value.to_string()));
    }

    /// The font selected by the current weight and style
    pub fn current_font(&self) -> StandardFont {
        StandardFont::from_variant(self.current_weight, self.current_style)
    }

    /// Get current font's text width for a string, in points
    ///
    /// # Example
    /// ```ignore
    /// doc.set_font_size(12.0);
    /// let width = doc.get_text_width("Hello");
    /// ```
    pub fn get_text_width(&self, text: &str) -> f64 {
        self.current_font()
            .text_width_points(text, self.current_font_size)
    }

    fn check_page(&self, page: usize) -> Result<()> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }
        Ok(())
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points (alignment anchor)
    /// * `y` - Y coordinate of the baseline in points (from top)
    /// * `align` - Text alignment around `x`
    ///
    /// Fails with [`PdfError::UnencodableText`] when `text` has a character
    /// the WinAnsi-encoded standard fonts cannot show.
    pub fn insert_text(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        self.check_page(page)?;

        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let text_hex = encode_text_hex(text)?;
        let font = self.current_font();
        let font_resource_name = self.get_or_create_font_ref(font, page);

        let ctx = TextRenderContext {
            font_name: font_resource_name,
            font_size: self.current_font_size,
            text_width: self.get_text_width(text),
            color: self.current_text_color,
        };

        // Convert Y coordinate from top-origin to PDF bottom-origin
        let pdf_y = self.page_size.height - y;
        let operators = generate_text_operators(&text_hex, x, pdf_y, align, &ctx);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Draw a straight line between two points (coordinates from top, in points)
    pub fn draw_line(&mut self, page: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        self.check_page(page)?;

        let height = self.page_size.height;
        let operators = generate_line_operators(
            x1,
            height - y1,
            x2,
            height - y2,
            self.current_line_width,
            self.current_draw_color,
        );
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.finish()?;
        self.inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.finish()?;
        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    /// Write buffered content, font resources and metadata into the object graph
    fn finish(&mut self) -> Result<()> {
        if self.page_ids.is_empty() {
            return Err(PdfError::SaveError("Document has no pages".to_string()));
        }

        // 1. Flush buffered content streams to pages
        self.flush_content_buffers()?;

        // 2. Add font dictionaries and page font resources
        self.finalize_page_font_resources()?;

        // 3. Document information dictionary
        self.write_info();

        Ok(())
    }

    /// Get or create a font reference for a specific page
    ///
    /// Returns the resource name (e.g., "F1", "F2") for use in content streams
    fn get_or_create_font_ref(&mut self, font: StandardFont, page: usize) -> String {
        let page_resources = self.page_font_resources.entry(page).or_default();

        if let Some(resource_name) = page_resources.get(&font) {
            return resource_name.clone();
        }

        let resource_name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;
        page_resources.insert(font, resource_name.clone());

        resource_name
    }

    /// Add one font dictionary object per used font, then reference them from pages
    fn finalize_page_font_resources(&mut self) -> Result<()> {
        let mut used: Vec<StandardFont> = self
            .page_font_resources
            .values()
            .flat_map(|fonts| fonts.keys().copied())
            .collect();
        used.sort();
        used.dedup();

        for font in used {
            if !self.embedded_fonts.contains_key(&font) {
                let font_id = self
                    .inner
                    .add_object(Object::Dictionary(font.to_pdf_dictionary()));
                self.embedded_fonts.insert(font, font_id);
            }
        }

        let page_resources: Vec<(usize, Vec<(StandardFont, String)>)> = self
            .page_font_resources
            .iter()
            .map(|(&page, fonts)| {
                let font_list = fonts
                    .iter()
                    .map(|(font, resource_name)| (*font, resource_name.clone()))
                    .collect();
                (page, font_list)
            })
            .collect();

        for (page, fonts) in page_resources {
            if !fonts.is_empty() {
                self.add_fonts_to_page_resources(page, &fonts)?;
            }
        }

        Ok(())
    }

    /// Add multiple fonts to a page's Resources dictionary in a single operation
    fn add_fonts_to_page_resources(
        &mut self,
        page: usize,
        fonts: &[(StandardFont, String)],
    ) -> Result<()> {
        let page_id = *self
            .page_ids
            .get(page - 1)
            .ok_or(PdfError::InvalidPage(page, self.page_ids.len()))?;

        let page_dict = self
            .inner
            .get_object(page_id)?
            .as_dict()
            .map_err(|_| PdfError::SaveError("Page object is not a dictionary".to_string()))?
            .clone();

        let mut resources_dict = match page_dict.get(b"Resources") {
            Ok(resources) => resources.as_dict().cloned().unwrap_or_default(),
            Err(_) => Dictionary::new(),
        };

        let mut font_dict = match resources_dict.get(b"Font") {
            Ok(font) => font.as_dict().cloned().unwrap_or_default(),
            Err(_) => Dictionary::new(),
        };

        for (font, resource_name) in fonts {
            let font_ref = self.embedded_fonts.get(font).ok_or_else(|| {
                PdfError::SaveError(format!("Font {} was not added", font.base_font()))
            })?;
            font_dict.set(resource_name.as_bytes(), Object::Reference(*font_ref));
        }

        resources_dict.set("Font", Object::Dictionary(font_dict));

        let mut new_page_dict = page_dict;
        new_page_dict.set("Resources", Object::Dictionary(resources_dict));
        self.inner
            .objects
            .insert(page_id, Object::Dictionary(new_page_dict));

        Ok(())
    }

    fn write_info(&mut self) {
        if self.info.is_empty() {
            return;
        }

        let mut info = Dictionary::new();
        for (key, value) in &self.info {
            info.set(
                key.as_bytes(),
                Object::String(encode_text_string(value), StringFormat::Literal),
            );
        }

        match self.info_id {
            Some(id) => {
                self.inner.objects.insert(id, Object::Dictionary(info));
            }
            None => {
                let id = self.inner.add_object(Object::Dictionary(info));
                self.inner.trailer.set("Info", Object::Reference(id));
                self.info_id = Some(id);
            }
        }
    }

    /// Buffer content operators for a page (written at save time)
    fn buffer_content(&mut self, page: usize, content: &[u8]) {
        self.page_content_buffer
            .entry(page)
            .or_default()
            .extend_from_slice(content);
    }

    /// Flush all buffered content to page streams
    ///
    /// Reads each page's existing content stream, appends the buffered
    /// operators and replaces the stream object in place.
    fn flush_content_buffers(&mut self) -> Result<()> {
        let buffers = std::mem::take(&mut self.page_content_buffer);

        for (page, content) in buffers {
            if content.is_empty() {
                continue;
            }

            let content_id = *self
                .content_ids
                .get(page - 1)
                .ok_or(PdfError::InvalidPage(page, self.content_ids.len()))?;

            let mut new_content = match self.inner.get_object(content_id) {
                Ok(Object::Stream(stream)) => stream
                    .decompressed_content()
                    .unwrap_or_else(|_| stream.content.clone()),
                _ => Vec::new(),
            };
            new_content.extend_from_slice(&content);

            let stream = if self.compress {
                let mut dict = Dictionary::new();
                dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
                Stream::new(dict, deflate(&new_content)?)
            } else {
                Stream::new(Dictionary::new(), new_content)
            };

            self.inner.objects.insert(content_id, Object::Stream(stream));
        }

        Ok(())
    }
}

/// Zlib-compress a content stream for `/FlateDecode`
fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| PdfError::CompressionError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| PdfError::CompressionError(e.to_string()))
}
