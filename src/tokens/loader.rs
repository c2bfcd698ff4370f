use std::{fs, io, path::Path};

use thiserror::Error;

use crate::tokens::TokenDocument;

#[derive(Error, Debug)]
pub enum TokenDocumentError {
    #[error("could not find token document at \"{path}\"")]
    NotFound { path: String },
    #[error("could not read token document at \"{path}\"")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("token document at \"{path}\" is not valid JSON")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TokenDocument {
    /// Reads and parses a token document from a file.
    ///
    /// Fails with [`TokenDocumentError::NotFound`] when the path does not
    /// resolve and [`TokenDocumentError::Parse`] when the file is not valid
    /// JSON. There is no retry and no partial result; a document is either
    /// fully loaded or the dependent build fails here.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TokenDocument, TokenDocumentError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| {
            let path = path.display().to_string();

            if source.kind() == io::ErrorKind::NotFound {
                TokenDocumentError::NotFound { path }
            } else {
                TokenDocumentError::Read { path, source }
            }
        })?;

        TokenDocument::from_string(contents).map_err(|source| TokenDocumentError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
