use crate::{
    intl::{DateFormatOptions, Intl, MessageKey},
    render::{BodyCopy, ImageSource},
    ArticleError, LocaleCode, RawArticle,
};
use serde::Deserialize;

/// Rich text the editor stores when the body was left empty.
pub const EMPTY_PARAGRAPH: &str = "<p><br></p>";

/// The first entry of an alternate image descriptor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlternateImage {
    /// The entry carries a derived (transformed) variant; its URL wins.
    WithDerived { url: String },
    Flat { url: String },
}

impl AlternateImage {
    pub fn url(&self) -> &str {
        match self {
            Self::WithDerived { url } | Self::Flat { url } => url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CloudinaryImage {
    #[serde(default)]
    secure_url: Option<String>,
    #[serde(default)]
    derived: Option<CloudinaryDerived>,
}

#[derive(Debug, Deserialize)]
struct CloudinaryDerived {
    #[serde(default)]
    secure_url: Option<String>,
}

/// Parse a JSON-encoded alternate image descriptor list and pick the URL of
/// its first entry.
pub fn parse_alternate_image(descriptor: &str) -> Result<AlternateImage, ArticleError> {
    let images: Vec<CloudinaryImage> = serde_json::from_str(descriptor)
        .map_err(|e| ArticleError::MalformedAlternateImage(e.to_string()))?;
    let first = images.into_iter().next().ok_or_else(|| {
        ArticleError::MalformedAlternateImage("descriptor list is empty".to_string())
    })?;

    let non_blank = |url: Option<String>| url.filter(|url| !url.trim().is_empty());
    match first.derived {
        Some(derived) => non_blank(derived.secure_url)
            .map(|url| AlternateImage::WithDerived { url })
            .ok_or_else(|| {
                ArticleError::MalformedAlternateImage("derived entry has no secure_url".to_string())
            }),
        None => non_blank(first.secure_url)
            .map(|url| AlternateImage::Flat { url })
            .ok_or_else(|| {
                ArticleError::MalformedAlternateImage("entry has no secure_url".to_string())
            }),
    }
}

/// Where the displayed image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage {
    Alternate(AlternateImage),
    Teaser(String),
    Missing,
}

impl ResolvedImage {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Alternate(image) => Some(image.url()),
            Self::Teaser(url) => Some(url),
            Self::Missing => None,
        }
    }
}

/// Alternate image first, then the first teaser image, then nothing.
pub fn resolve_image(raw: &RawArticle) -> Result<ResolvedImage, ArticleError> {
    if let Some(descriptor) = raw
        .cloudinary_image
        .as_deref()
        .filter(|descriptor| !descriptor.trim().is_empty())
    {
        return parse_alternate_image(descriptor).map(ResolvedImage::Alternate);
    }

    Ok(raw
        .teaser_image
        .first()
        .map(|asset| asset.url.as_str())
        .filter(|url| !url.trim().is_empty())
        .map_or(ResolvedImage::Missing, |url| {
            ResolvedImage::Teaser(url.to_string())
        }))
}

/// The raw title when it has visible characters.
pub fn select_title(raw: &RawArticle) -> Option<&str> {
    raw.title
        .as_deref()
        .filter(|title| !title.trim().is_empty())
}

/// The raw body unless it is absent or the editor's empty paragraph.
pub fn select_body_copy(raw: &RawArticle) -> Option<&str> {
    raw.body_copy
        .as_deref()
        .filter(|body| *body != EMPTY_PARAGRAPH)
}

pub fn select_post_date(raw: &RawArticle) -> Result<&str, ArticleError> {
    raw.post_date
        .as_deref()
        .filter(|date| !date.trim().is_empty())
        .ok_or(ArticleError::MissingPostDate)
}

/// Display-ready values of one article. Produced all at once or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedArticle {
    pub title: String,
    pub image: ImageSource,
    pub post_date: String,
    pub body: BodyCopy,
}

pub fn normalize(
    raw: &RawArticle,
    locale: &LocaleCode,
    intl: &dyn Intl,
) -> Result<NormalizedArticle, ArticleError> {
    let post_date = select_post_date(raw)?;
    let resolved_image = resolve_image(raw)?;

    let title = select_title(raw).map_or_else(
        || intl.format_message(locale, MessageKey::NoTitle),
        ToString::to_string,
    );
    let image = match resolved_image.url() {
        Some(src) => ImageSource::Image {
            src: src.to_string(),
            alt: title.clone(),
            title: title.clone(),
        },
        None => ImageSource::Placeholder {
            message: intl.format_message(locale, MessageKey::NoTeaserImage),
        },
    };
    let body = match select_body_copy(raw) {
        Some(markup) => BodyCopy::RichText(markup.to_string()),
        None => BodyCopy::Placeholder(intl.format_message(locale, MessageKey::NoBodyCopy)),
    };

    Ok(NormalizedArticle {
        title,
        image,
        post_date: intl.format_date(locale, post_date, &DateFormatOptions::LONG),
        body,
    })
}
