//! The namespaces understood out of the box.
//!
//! The table is data: adding a namespace needs no change elsewhere.

/// One row of the standard table.
pub(crate) struct StandardNamespace {
    pub prefix: &'static str,
    pub uri: &'static str,
    pub aliases: &'static [&'static str],
}

const fn ns(prefix: &'static str, uri: &'static str) -> StandardNamespace {
    StandardNamespace {
        prefix,
        uri,
        aliases: &[],
    }
}

const fn ns_with_aliases(
    prefix: &'static str,
    uri: &'static str,
    aliases: &'static [&'static str],
) -> StandardNamespace {
    StandardNamespace {
        prefix,
        uri,
        aliases,
    }
}

pub(crate) const STANDARD_NAMESPACES: &[StandardNamespace] = &[
    ns("atom", "http://www.w3.org/2005/Atom"),
    ns("dc", "http://purl.org/dc/elements/1.1/"),
    ns("dcterms", "http://purl.org/dc/terms/"),
    ns("sy", "http://purl.org/rss/1.0/modules/syndication/"),
    ns("content", "http://purl.org/rss/1.0/modules/content/"),
    ns("slash", "http://purl.org/rss/1.0/modules/slash/"),
    ns("media", "http://search.yahoo.com/mrss/"),
    ns("podcast", "https://podcastindex.org/namespace/1.0"),
    ns("itunes", "http://www.itunes.com/dtds/podcast-1.0.dtd"),
    ns_with_aliases(
        "georss",
        "http://www.georss.org/georss",
        &["http://www.georss.org/georss/"],
    ),
    ns("geo", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
    ns_with_aliases(
        "googleplay",
        "http://www.google.com/schemas/play-podcasts/1.0",
        &[
            "http://www.google.com/schemas/play-podcasts/1.0/",
            "https://www.google.com/schemas/play-podcasts/1.0",
            "https://www.google.com/schemas/play-podcasts/1.0/",
        ],
    ),
    ns("cc", "http://creativecommons.org/ns#"),
    ns(
        "creativecommons",
        "http://backend.userland.com/creativeCommonsRssModule",
    ),
    ns("opensearch", "http://a9.com/-/spec/opensearch/1.1/"),
    ns("arxiv", "http://arxiv.org/schemas/atom"),
    ns("psc", "http://podlove.org/simple-chapters"),
    ns("wfw", "http://wellformedweb.org/CommentAPI/"),
    ns("pingback", "http://madskills.com/public/xml/rss/module/pingback/"),
    ns("admin", "http://webns.net/mvcb/"),
    ns("trackback", "http://madskills.com/public/xml/rss/module/trackback/"),
    ns("yt", "http://www.youtube.com/xml/schemas/2015"),
    ns("app", "http://www.w3.org/2007/app"),
    ns("thr", "http://purl.org/syndication/thread/1.0"),
    ns("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ns("xml", "http://www.w3.org/XML/1998/namespace"),
    ns("rawvoice", "http://www.rawvoice.com/rawvoiceRssModule/"),
    ns("feedpress", "https://feed.press/xmlns"),
    ns("spotify", "http://www.spotify.com/ns/rss"),
    ns("opds", "http://opds-spec.org/2010/catalog"),
    ns("source", "http://source.scripting.com/"),
    ns("g", "http://base.google.com/ns/1.0"),
    ns("acast", "https://schema.acast.com/1.0/"),
    ns("prism", "http://prismstandard.org/namespaces/basic/3.0/"),
    ns("blogchannel", "http://backend.userland.com/blogChannelModule"),
];
