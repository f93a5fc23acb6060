use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use ramhorns::Template;

use crate::error::{CardError, CardResult};
use crate::post::PostDocument;
use crate::text_utils::{capitalize, format_timestamp, sanitize_filename};

pub const DEFAULT_CARD_TEMPLATE: &str = include_str!("../../res/card.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderColor {
    Red,
    Green,
    Blue,
    Gray,
}

impl HeaderColor {
    /// Case-sensitive lookup, anything unknown falls back to gray
    pub fn for_type(kind: &str) -> HeaderColor {
        match kind {
            "test" => HeaderColor::Red,
            "fix" => HeaderColor::Green,
            "post" => HeaderColor::Blue,
            _ => HeaderColor::Gray,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderColor::Red => "red",
            HeaderColor::Green => "green",
            HeaderColor::Blue => "blue",
            HeaderColor::Gray => "gray",
        }
    }
}

#[derive(ramhorns::Content)]
struct CardView<'a> {
    header_color: &'a str,
    formatted_type: &'a str,
    titre: &'a str,
    objet: &'a str,
    contexte: &'a str,
    corps: &'a str,
    resultats: &'a str,
    auteur: &'a str,
    date: &'a str,
}

pub struct CardRenderer {
    template: Template<'static>,
}

impl CardRenderer {
    pub fn new<S: Into<String>>(card_tpl_src: S) -> CardResult<CardRenderer> {
        let template = Template::new(card_tpl_src.into())
            .map_err(|e| CardError::Template(e.to_string()))?;

        Ok(CardRenderer {
            template,
        })
    }

    pub fn builtin() -> CardResult<CardRenderer> {
        Self::new(DEFAULT_CARD_TEMPLATE)
    }

    pub fn from_file(tpl_path: &Path) -> CardResult<CardRenderer> {
        let src = fs::read_to_string(tpl_path).map_err(|source| CardError::Read {
            path: tpl_path.to_path_buf(),
            source,
        })?;
        Self::new(src)
    }

    /// Values are inserted verbatim, markup in the document is not escaped.
    pub fn render(&self, doc: &PostDocument, now: &NaiveDateTime) -> String {
        let header_color = HeaderColor::for_type(&doc.kind);
        let formatted_type = capitalize(&doc.kind);
        let date = format_timestamp(now);

        self.template.render(&CardView {
            header_color: header_color.as_str(),
            formatted_type: &formatted_type,
            titre: &doc.titre,
            objet: &doc.objet,
            contexte: &doc.contexte,
            corps: &doc.corps,
            resultats: &doc.resultats,
            auteur: &doc.auteur,
            date: &date,
        })
    }
}

/// `{FormattedType}({SanitizedTitle})`, shared by the HTML and PNG outputs
pub fn base_file_name(doc: &PostDocument) -> String {
    format!("{}({})", capitalize(&doc.kind), sanitize_filename(&doc.titre))
}
