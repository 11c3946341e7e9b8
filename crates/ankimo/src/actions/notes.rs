//! Note-related AnkiConnect actions.

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct UpdateNoteFieldsParams<'a> {
    note: UpdateNoteFieldsInner<'a>,
}

#[derive(Serialize)]
struct UpdateNoteFieldsInner<'a> {
    id: i64,
    fields: FrontBack<'a>,
}

#[derive(Serialize)]
struct FrontBack<'a> {
    #[serde(rename = "Front")]
    front: &'a str,
    #[serde(rename = "Back")]
    back: &'a str,
}

impl<'a> NoteActions<'a> {
    /// Replace the front field of a note.
    ///
    /// AnkiConnect expects both fields, so the unchanged back text must be
    /// passed along.
    ///
    /// # Warning
    ///
    /// If the note is currently displayed in Anki's browser, changes may not
    /// persist due to a known AnkiConnect limitation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankimo::AnkiClient;
    /// # async fn example() -> ankimo::Result<()> {
    /// let client = AnkiClient::new();
    /// client
    ///     .notes()
    ///     .update_front(1234567890, "the cat<br><br>kæt", "neko")
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_front(&self, note_id: i64, front: &str, back: &str) -> Result<()> {
        self.client
            .invoke_void(
                "updateNoteFields",
                UpdateNoteFieldsParams {
                    note: UpdateNoteFieldsInner {
                        id: note_id,
                        fields: FrontBack { front, back },
                    },
                },
            )
            .await
    }
}
