//! Fixed-width text placement on a page.

use crate::{
    error::{KilnError, Result},
    simple_encode::{name::escape_name, string::escape_text, type_mismatch},
};

use super::{
    document::{K_BASE_FONT, K_ENCODING, K_FONT, K_MEDIA_BOX, K_NAME, K_PROC_SET, K_RESOURCES},
    Dictionary, Document, Escaping, IndirectObject, Name, Object, ObjectId, StreamFilters, StreamProducer,
};

const T_FONT: &str = "Font";
const ST_TYPE1: &str = "Type1";
const MAC_ROMAN: &str = "MacRomanEncoding";
/// US letter, in points.
const MEDIA_BOX: [i64; 4] = [0, 0, 612, 792];

/// Content stream that shows `text` line by line starting at `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStream {
    text: String,
    position: (i64, i64),
    font: Name,
    size: i64,
    line_height: i64,
    outline: bool,
    escaping: Escaping,
}

impl TextStream {
    /// `font` is the font's resource name on the page, e.g. `F1`.
    pub fn new(text: impl Into<String>, position: (i64, i64), font: impl Into<Name>) -> Self {
        let size = 12;
        Self {
            text: text.into(),
            position,
            font: font.into(),
            size,
            line_height: default_line_height(size),
            outline: false,
            escaping: Escaping::default(),
        }
    }

    /// Sets the font size. The line height follows unless set afterwards.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self.line_height = default_line_height(size);
        self
    }

    pub fn with_line_height(mut self, line_height: i64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Draws a rectangle around the text.
    pub fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Lines escaped as they appear between the string delimiters.
    fn lines(&self) -> Vec<String> {
        self.text
            .split('\n')
            .map(|line| escape_text(line, self.escaping))
            .collect()
    }

    fn outline_operators(&self, lines: &[String]) -> String {
        let (x, y) = self.position;
        let quarter = self.size / 4;

        let left = if x > quarter { x - quarter } else { 0 };
        let bottom = if y > quarter { y + self.size + quarter } else { 0 };

        // the first line is measured with its opening parenthesis, the last
        // with its closing one
        let last = lines.len().saturating_sub(1);
        let longest = lines
            .iter()
            .enumerate()
            .map(|(i, line)| line.len() + usize::from(i == 0) + usize::from(i == last))
            .max()
            .unwrap_or(0) as i64;
        let mut width = longest * self.size;
        width -= width / 3;
        let height = -(self.line_height * lines.len() as i64 + quarter * 2);

        format!("\n{} {} {} {} re S", left, bottom, width, height)
    }
}

fn default_line_height(size: i64) -> i64 {
    size + size / 4
}

impl StreamProducer for TextStream {
    fn produce(&self) -> Vec<u8> {
        let lines = self.lines();
        let (x, y) = self.position;
        let mut out = format!(
            "BT {} {} Tf {} {} Td {} TL\n",
            escape_name(&self.font, self.escaping),
            self.size,
            x,
            y,
            self.line_height
        );
        for (i, line) in lines.iter().enumerate() {
            out.push('(');
            out.push_str(line);
            out.push_str(if i == 0 { ") Tj\n" } else { ") '\n" });
        }
        out.push_str("ET");
        if self.outline {
            out.push_str(&self.outline_operators(&lines));
        }
        out.into_bytes()
    }
}

/// Options for [`Document::add_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Base font of the Type1 font object.
    pub font: String,
    pub size: i64,
    pub line_height: Option<i64>,
    pub outline: bool,
    /// Filters of a newly created content stream.
    pub filters: StreamFilters,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_owned(),
            size: 12,
            line_height: None,
            outline: false,
            filters: StreamFilters::default(),
        }
    }
}

/// A dictionary reached from an object's dictionary through nested keys.
#[derive(Debug, Clone)]
struct DictPath {
    object: ObjectId,
    keys: Vec<&'static str>,
}

impl DictPath {
    fn object(object: ObjectId) -> Self {
        Self {
            object,
            keys: Vec::new(),
        }
    }
}

impl Document {
    /// Places `text` on `page` with a new Type1 font.
    ///
    /// The first call on a page creates its content stream. Later calls
    /// append to it. The font goes into `/Resources/Font`, following
    /// indirect references and creating the dictionaries that are missing.
    /// A page without `/MediaBox` gets US letter.
    ///
    /// The page is checked before anything is created, so a failed call
    /// leaves the document unchanged.
    pub fn add_text(&mut self, page: ObjectId, text: &str, position: (i64, i64), options: &TextOptions) -> Result<()> {
        let page_path = DictPath::object(page);
        let existing = self.object(page)?.dictionary.content;
        if let Some(content) = existing {
            if self.object(content)?.stream().is_none() {
                return Err(KilnError::MissingStream(content));
            }
        }
        let resources = self.child_dictionary(&page_path, K_RESOURCES)?;
        let fonts = match &resources {
            Some(resources) => self.child_dictionary(resources, K_FONT)?,
            None => None,
        };

        let font_name = self.next_font_name();
        let font = self.add(IndirectObject::new(
            Dictionary::typed(T_FONT)
                .with_subtype(ST_TYPE1)
                .with(K_NAME, Name::new(font_name.clone()))
                .with(K_BASE_FONT, Name::new(options.font.clone()))
                .with(K_ENCODING, Name::from(MAC_ROMAN)),
        ));

        let mut stream = TextStream::new(text, position, font_name.clone())
            .with_size(options.size)
            .with_outline(options.outline)
            .with_escaping(self.config().escaping);
        if let Some(line_height) = options.line_height {
            stream = stream.with_line_height(line_height);
        }

        match existing {
            None => {
                log::trace!("create content stream for page {}", page);
                let content = self.add(IndirectObject::with_stream(
                    Dictionary::new(),
                    Box::new(stream) as Box<dyn StreamProducer>,
                    options.filters,
                ));
                self.object_mut(page)?.dictionary.content = Some(content);
            }
            Some(content) => {
                log::trace!("extend content stream {} of page {}", content, page);
                let mut more = vec![b'\n'];
                more.extend(stream.produce());
                self.extend_stream(content, &more)?;
            }
        }

        match (resources, fonts) {
            (_, Some(fonts)) => {
                self.dictionary_mut(&fonts)?.insert(font_name, font);
            }
            (Some(resources), None) => {
                self.dictionary_mut(&resources)?
                    .insert(K_FONT, Dictionary::new().with(font_name, font));
            }
            (None, None) => {
                let resources = Dictionary::new()
                    .with(K_PROC_SET, vec![Object::Name("PDF".into()), Object::Name("Text".into())])
                    .with(K_FONT, Dictionary::new().with(font_name, font));
                self.dictionary_mut(&page_path)?.insert(K_RESOURCES, resources);
            }
        }

        let dict = &mut self.object_mut(page)?.dictionary;
        if dict.get(K_MEDIA_BOX).is_none() {
            let media_box: Vec<Object> = MEDIA_BOX.iter().map(|v| Object::Integer(*v)).collect();
            dict.insert(K_MEDIA_BOX, media_box);
        }
        Ok(())
    }

    /// Dictionary stored under `key`, either inline or as an object reference.
    fn child_dictionary(&self, parent: &DictPath, key: &'static str) -> Result<Option<DictPath>> {
        match self.dictionary_at(parent)?.get(key) {
            None => Ok(None),
            Some(Object::Dictionary(_)) => {
                let mut path = parent.clone();
                path.keys.push(key);
                Ok(Some(path))
            }
            Some(Object::Reference(id)) => {
                self.object(*id)?;
                Ok(Some(DictPath::object(*id)))
            }
            Some(other) => Err(type_mismatch(key, other)),
        }
    }

    fn dictionary_at(&self, path: &DictPath) -> Result<&Dictionary> {
        let mut dict = &self.object(path.object)?.dictionary;
        for &key in &path.keys {
            dict = match dict.get(key) {
                Some(Object::Dictionary(d)) => d,
                other => return Err(type_mismatch(key, other.unwrap_or(&Object::Null))),
            };
        }
        Ok(dict)
    }

    fn dictionary_mut(&mut self, path: &DictPath) -> Result<&mut Dictionary> {
        let mut dict = &mut self.object_mut(path.object)?.dictionary;
        for &key in &path.keys {
            dict = match dict.get_mut(key) {
                Some(Object::Dictionary(d)) => d,
                other => return Err(type_mismatch(key, other.map_or(&Object::Null, |o| &*o))),
            };
        }
        Ok(dict)
    }
}
