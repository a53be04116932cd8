use crate::{normalizer::NormalizedArticle, ArticleMetadata, LocaleCode, RawArticle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Image {
        src: String,
        alt: String,
        title: String,
    },
    /// Rendered as a placeholder tile carrying `message`.
    Placeholder { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyCopy {
    /// Rich text markup, untouched, for the host's rich text renderer.
    RichText(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    /// Codename of the selected host, e.g. `youtube` or `vimeo`.
    pub host: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleEmbeds {
    pub video: Option<VideoEmbed>,
    pub tweet_link: Option<String>,
    pub theme: Vec<String>,
    pub display_options: Vec<String>,
}

impl ArticleEmbeds {
    fn from_raw(raw: &RawArticle) -> Self {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
        };
        let video = raw
            .video_host
            .first()
            .zip(non_blank(&raw.video_id))
            .map(|(host, video_id)| VideoEmbed {
                host: host.codename.clone(),
                video_id,
            });

        Self {
            video,
            tweet_link: non_blank(&raw.tweet_link),
            theme: raw.theme.iter().map(|o| o.codename.clone()).collect(),
            display_options: raw
                .display_options
                .iter()
                .map(|o| o.codename.clone())
                .collect(),
        }
    }
}

/// Everything needed to render one article in one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub id: String,
    pub locale: LocaleCode,
    pub title: String,
    pub image: ImageSource,
    pub post_date: String,
    pub body: BodyCopy,
    pub embeds: ArticleEmbeds,
    pub metadata: ArticleMetadata,
}

impl RenderModel {
    pub fn assemble(raw: &RawArticle, normalized: NormalizedArticle) -> Self {
        let NormalizedArticle {
            title,
            image,
            post_date,
            body,
        } = normalized;

        Self {
            id: raw.system.id.clone(),
            locale: raw.language(),
            title,
            image,
            post_date,
            body,
            embeds: ArticleEmbeds::from_raw(raw),
            metadata: raw.metadata.clone(),
        }
    }
}
