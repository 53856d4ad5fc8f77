//! Default allow-list tables.
//!
//! Pure data: every table is a `&[&str]` consumed by [`crate::config::SanitizeConfig`]
//! when building the default whitelist sets. Nothing in here is consulted
//! directly at sanitize time.
//!
//! Element and attribute names are case-sensitive; SVG uses mixed-case names
//! (`clipPath`, `attributeName`, `viewBox`) that must match exactly.

/// HTML elements considered presentational and safe.
pub const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "address", "area", "audio", "b", "big", "blockquote", "br", "button",
    "caption", "center", "cite", "code", "col", "colgroup", "dd", "del", "dfn", "dir", "div", "dl",
    "dt", "em", "fieldset", "font", "form", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img",
    "input", "ins", "kbd", "label", "legend", "li", "map", "menu", "ol", "optgroup", "option", "p",
    "pre", "q", "s", "samp", "select", "small", "span", "strike", "strong", "sub", "sup", "table",
    "tbody", "td", "textarea", "tfoot", "th", "thead", "tr", "tt", "u", "ul", "var", "video",
];

/// MathML presentation and semantics elements.
pub const MATHML_ELEMENTS: &[&str] = &[
    "annotation", "annotation-xml", "maction", "math", "merror", "mfrac", "mfenced", "mi",
    "mmultiscripts", "mn", "mo", "mover", "mpadded", "mphantom", "mprescripts", "mroot", "mrow",
    "mspace", "msqrt", "mstyle", "msub", "msubsup", "msup", "mtable", "mtd", "mtext", "mtr",
    "munder", "munderover", "none", "semantics",
];

/// SVG shape, paint-server, text and animation elements.
pub const SVG_ELEMENTS: &[&str] = &[
    "a", "animate", "animateColor", "animateMotion", "animateTransform", "circle", "clipPath",
    "defs", "desc", "ellipse", "font-face", "font-face-name", "font-face-src", "foreignObject",
    "g", "glyph", "hkern", "linearGradient", "line", "marker", "metadata", "missing-glyph",
    "mpath", "path", "polygon", "polyline", "radialGradient", "rect", "set", "stop", "svg",
    "switch", "text", "title", "tspan", "use",
];

/// HTML attributes considered presentational and safe.
pub const HTML_ATTRIBUTES: &[&str] = &[
    "abbr", "accept", "accept-charset", "accesskey", "action", "align", "alt", "axis", "border",
    "cellpadding", "cellspacing", "char", "charoff", "charset", "checked", "cite", "class",
    "clear", "cols", "colspan", "color", "compact", "controls", "coords", "datetime", "dir",
    "disabled", "enctype", "for", "frame", "headers", "height", "href", "hreflang", "hspace",
    "id", "ismap", "label", "lang", "longdesc", "loop", "maxlength", "media", "method",
    "multiple", "name", "nohref", "noshade", "nowrap", "poster", "prompt", "readonly", "rel",
    "rev", "rows", "rowspan", "rules", "scope", "selected", "shape", "size", "span", "src",
    "start", "style", "summary", "tabindex", "target", "title", "type", "usemap", "valign",
    "value", "vspace", "width", "xml:lang",
];

/// MathML attributes.
pub const MATHML_ATTRIBUTES: &[&str] = &[
    "actiontype", "align", "close", "columnalign", "columnlines", "columnspacing", "columnspan",
    "depth", "display", "displaystyle", "encoding", "equalcolumns", "equalrows", "fence",
    "fontstyle", "fontweight", "frame", "height", "linethickness", "lspace", "mathbackground",
    "mathcolor", "mathvariant", "maxsize", "minsize", "open", "other", "rowalign", "rowlines",
    "rowspacing", "rowspan", "rspace", "scriptlevel", "selection", "separator", "separators",
    "stretchy", "width", "xlink:href", "xlink:show", "xlink:type", "xmlns", "xmlns:xlink",
];

/// SVG attributes.
pub const SVG_ATTRIBUTES: &[&str] = &[
    "accent-height", "accumulate", "additive", "alphabetic", "arabic-form", "ascent",
    "attributeName", "attributeType", "baseProfile", "bbox", "begin", "by", "calcMode",
    "cap-height", "class", "clip-path", "clip-rule", "color", "color-rendering", "content", "cx",
    "cy", "d", "dx", "dy", "descent", "display", "dur", "end", "fill", "fill-opacity",
    "fill-rule", "font-family", "font-size", "font-stretch", "font-style", "font-variant",
    "font-weight", "from", "fx", "fy", "g1", "g2", "glyph-name", "gradientUnits", "hanging",
    "height", "horiz-adv-x", "horiz-origin-x", "id", "ideographic", "k", "keyPoints",
    "keySplines", "keyTimes", "lang", "marker-end", "marker-mid", "marker-start", "markerHeight",
    "markerUnits", "markerWidth", "mathematical", "max", "min", "name", "offset", "opacity",
    "orient", "origin", "overline-position", "overline-thickness", "panose-1", "path",
    "pathLength", "points", "preserveAspectRatio", "r", "refX", "refY", "repeatCount",
    "repeatDur", "requiredExtensions", "requiredFeatures", "restart", "rotate", "rx", "ry",
    "slope", "stemh", "stemv", "stop-color", "stop-opacity", "strikethrough-position",
    "strikethrough-thickness", "stroke", "stroke-dasharray", "stroke-dashoffset",
    "stroke-linecap", "stroke-linejoin", "stroke-miterlimit", "stroke-opacity", "stroke-width",
    "systemLanguage", "target", "text-anchor", "to", "transform", "type", "u1", "u2",
    "underline-position", "underline-thickness", "unicode", "unicode-range", "units-per-em",
    "values", "version", "viewBox", "visibility", "width", "widths", "x", "x-height", "x1", "x2",
    "xlink:actuate", "xlink:arcrole", "xlink:href", "xlink:role", "xlink:show", "xlink:title",
    "xlink:type", "xml:base", "xml:lang", "xml:space", "xmlns", "xmlns:xlink", "y", "y1", "y2",
    "zoomAndPan",
];

/// Attributes whose value is a URI and therefore subject to the scheme check.
pub const URI_ATTRIBUTES: &[&str] = &[
    "href", "src", "cite", "action", "longdesc", "xlink:href", "xml:base",
];

/// SVG attributes that may take `url(...)` paint-server/clip references.
/// References are restricted to same-document fragments.
pub const SVG_REF_ATTRIBUTES: &[&str] = &[
    "clip-path", "color-profile", "cursor", "fill", "filter", "marker", "marker-start",
    "marker-mid", "marker-end", "mask", "stroke",
];

/// SVG elements whose `xlink:href` is restricted to same-document fragments.
pub const SVG_LOCAL_HREF_ELEMENTS: &[&str] = &[
    "altGlyph", "animate", "animateColor", "animateMotion", "animateTransform", "cursor",
    "feImage", "filter", "linearGradient", "pattern", "radialGradient", "textpath", "tref",
    "set", "use",
];

/// CSS properties kept verbatim in `style` values.
pub const CSS_PROPERTIES: &[&str] = &[
    "azimuth", "background-color", "border-bottom-color", "border-collapse", "border-color",
    "border-left-color", "border-right-color", "border-top-color", "clear", "color", "cursor",
    "direction", "display", "elevation", "float", "font", "font-family", "font-size",
    "font-style", "font-variant", "font-weight", "height", "letter-spacing", "line-height",
    "overflow", "pause", "pause-after", "pause-before", "pitch", "pitch-range", "richness",
    "speak", "speak-header", "speak-numeral", "speak-punctuation", "speech-rate", "stress",
    "text-align", "text-decoration", "text-indent", "unicode-bidi", "vertical-align",
    "voice-family", "volume", "white-space", "width",
];

/// Value keywords accepted for the shorthand property families
/// (`background`, `border`, `margin`, `padding`).
pub const CSS_KEYWORDS: &[&str] = &[
    "auto", "aqua", "black", "block", "blue", "bold", "both", "bottom", "brown", "center",
    "collapse", "dashed", "dotted", "fuchsia", "gray", "green", "!important", "italic", "left",
    "lime", "maroon", "medium", "none", "navy", "normal", "nowrap", "olive", "pointer", "purple",
    "red", "right", "solid", "silver", "teal", "top", "transparent", "underline", "white",
    "yellow",
];

/// SVG-only CSS properties kept verbatim in `style` values.
pub const SVG_CSS_PROPERTIES: &[&str] = &[
    "fill", "fill-opacity", "fill-rule", "stroke", "stroke-width", "stroke-linecap",
    "stroke-linejoin", "stroke-opacity",
];

/// URI schemes allowed in URI-valued attributes.
pub const PROTOCOLS: &[&str] = &[
    "ed2k", "ftp", "http", "https", "irc", "mailto", "news", "gopher", "nntp", "telnet",
    "webcal", "xmpp", "callto", "feed", "urn", "aim", "rsync", "tag", "ssh", "sftp", "rtsp",
    "afs",
];

/// Elements that cannot contain children and serialize self-closing.
pub const VOID_ELEMENTS: &[&str] = &[
    "img", "br", "hr", "link", "meta", "area", "base", "basefont", "col", "frame", "input",
    "isindex", "param",
];
