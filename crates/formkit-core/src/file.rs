//! Reading picked files into data URLs
//!
//! The file widget stores the picked image inline as a
//! `data:<mime>;base64,<payload>` string. Reading is an explicit async step
//! whose failure comes back as a [`FormError::FileRead`] rather than being
//! dropped.

use std::fmt;
use std::future::Future;

use base64::Engine;
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::form::{FormState, SetValueOptions};

/// Scheme prefix every data URL starts with
pub const DATA_URL_SCHEME: &str = "data:";

/// Mime types the image picker accepts
pub const IMAGE_ACCEPT: &str = "image/*";

/// A base64 data URL
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode `bytes` with the given mime type
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        DataUrl(format!("{DATA_URL_SCHEME}{mime};base64,{payload}"))
    }

    /// Mime type between the scheme and the `;base64` marker
    pub fn mime(&self) -> &str {
        self.0[DATA_URL_SCHEME.len()..]
            .split(';')
            .next()
            .unwrap_or_default()
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        let payload = self
            .0
            .split_once(";base64,")
            .map(|(_, p)| p)
            .ok_or_else(|| FormError::Conversion("data URL has no base64 payload".into()))?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| FormError::Conversion(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guess a mime type from a file name's extension
pub fn mime_for_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Files picked in a file input
pub trait FileSource {
    /// Names of the picked files, in picker order
    fn file_names(&self) -> Vec<String>;

    /// Full contents of one picked file, `None` when it cannot be read
    fn read(&self, name: &str) -> impl Future<Output = Option<Vec<u8>>>;
}

/// Read the first picked file as a data URL.
///
/// `Ok(None)` means nothing was picked.
pub async fn read_selection<S: FileSource>(source: Option<&S>) -> Result<Option<DataUrl>> {
    let Some(source) = source else {
        return Ok(None);
    };
    let Some(name) = source.file_names().into_iter().next() else {
        return Ok(None);
    };

    let bytes = source
        .read(&name)
        .await
        .ok_or_else(|| FormError::FileRead(name.clone()))?;
    tracing::debug!(file = %name, size = bytes.len(), "read picked file");

    Ok(Some(DataUrl::encode(mime_for_name(&name), &bytes)))
}

/// Write a file selection into the form: the data URL, or `""` when
/// nothing was picked. Both writes mark the field dirty.
pub fn apply_file_selection<F: FormState + ?Sized>(
    form: &mut F,
    name: &str,
    selection: Option<DataUrl>,
) {
    let value = selection.map(DataUrl::into_string).unwrap_or_default();
    form.set_value(name, Value::String(value), SetValueOptions::dirty());
}

/// Read the selection and store it in `name`.
pub async fn load_file_field<F, S>(form: &mut F, name: &str, source: Option<&S>) -> Result<()>
where
    F: FormState + ?Sized,
    S: FileSource,
{
    let selection = read_selection(source).await?;
    apply_file_selection(form, name, selection);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValues;

    /// In-memory picked files; `None` contents simulate an unreadable file
    struct MemoryFiles(Vec<(String, Option<Vec<u8>>)>);

    impl FileSource for MemoryFiles {
        fn file_names(&self) -> Vec<String> {
            self.0.iter().map(|(n, _)| n.clone()).collect()
        }

        async fn read(&self, name: &str) -> Option<Vec<u8>> {
            self.0
                .iter()
                .find(|(n, _)| n == name)
                .and_then(|(_, bytes)| bytes.clone())
        }
    }

    #[test]
    fn encode_builds_base64_data_url() {
        let url = DataUrl::encode("image/png", b"hi");
        assert_eq!(url.as_str(), "data:image/png;base64,aGk=");
        assert_eq!(url.mime(), "image/png");
        assert_eq!(url.decode().unwrap(), b"hi");
    }

    #[test]
    fn mime_guess_is_case_insensitive() {
        assert_eq!(mime_for_name("Cover.PNG"), "image/png");
        assert_eq!(mime_for_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_name("noext"), "application/octet-stream");
    }

    #[tokio::test]
    async fn no_source_means_no_selection() {
        let selection = read_selection::<MemoryFiles>(None).await.unwrap();
        assert!(selection.is_none());

        let empty = MemoryFiles(vec![]);
        assert!(read_selection(Some(&empty)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn picked_file_becomes_data_url() {
        let files = MemoryFiles(vec![
            ("a.gif".into(), Some(vec![1, 2, 3])),
            ("b.png".into(), Some(vec![9])),
        ]);
        let url = read_selection(Some(&files)).await.unwrap().unwrap();
        assert!(url.as_str().starts_with("data:image/gif;base64,"));
        assert_eq!(url.decode().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unreadable_file_is_an_error() {
        let files = MemoryFiles(vec![("broken.png".into(), None)]);
        let err = read_selection(Some(&files)).await.unwrap_err();
        assert!(matches!(err, FormError::FileRead(name) if name == "broken.png"));
    }

    #[tokio::test]
    async fn clearing_selection_empties_field_and_marks_dirty() {
        let mut form = FormValues::new().with("image", "data:image/png;base64,AA==");
        load_file_field::<_, MemoryFiles>(&mut form, "image", None)
            .await
            .unwrap();
        assert_eq!(form.value("image"), Value::String(String::new()));
        assert!(form.is_field_dirty("image"));
    }

    #[tokio::test]
    async fn loading_file_sets_data_url_and_marks_dirty() {
        let mut form = FormValues::new();
        let files = MemoryFiles(vec![("me.webp".into(), Some(b"img".to_vec()))]);
        load_file_field(&mut form, "image", Some(&files)).await.unwrap();
        assert!(form.text("image").starts_with(DATA_URL_SCHEME));
        assert!(form.is_field_dirty("image"));
    }

    #[tokio::test]
    async fn failed_read_leaves_field_untouched() {
        let mut form = FormValues::new().with("image", "keep");
        let files = MemoryFiles(vec![("x.png".into(), None)]);
        assert!(load_file_field(&mut form, "image", Some(&files)).await.is_err());
        assert_eq!(form.text("image"), "keep");
        assert!(!form.is_dirty());
    }

    #[tokio::test]
    async fn successful_pick_clears_earlier_read_error() {
        let mut form = FormValues::new();
        form.set_error("image", "Failed to read file: broken.png");
        let files = MemoryFiles(vec![("ok.png".into(), Some(vec![1]))]);
        load_file_field(&mut form, "image", Some(&files)).await.unwrap();
        assert_eq!(form.text("image"), "data:image/png;base64,AQ==");
        assert_eq!(form.error("image"), None);
    }

    #[tokio::test]
    async fn last_selection_wins() {
        let mut form = FormValues::new();
        let first = MemoryFiles(vec![("1.png".into(), Some(vec![1]))]);
        let second = MemoryFiles(vec![("2.jpg".into(), Some(vec![2]))]);
        load_file_field(&mut form, "image", Some(&first)).await.unwrap();
        load_file_field(&mut form, "image", Some(&second)).await.unwrap();
        assert!(form.text("image").starts_with("data:image/jpeg;base64,"));
    }
}
