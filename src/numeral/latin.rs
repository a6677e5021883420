use std::{collections::HashMap, sync::LazyLock};

use Marker::{M, N, S, X};

/// A letter a following fragment may ask the preceding units fragment to
/// take on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    S,
    X,
    M,
    N,
}

/// A Latin number fragment and the markers it imposes on a units fragment
/// placed before it.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub text:    &'static str,
    pub markers: &'static [Marker],
}

const fn fragment(text: &'static str, markers: &'static [Marker]) -> Fragment {
    Fragment { text, markers }
}

const UNITS: [&str; 10] = ["", "un", "duo", "tre", "quattuor", "quinqua", "se", "septe", "octo",
                           "nove"];

const TENS: [Fragment; 10] = [fragment("", &[]),
                              fragment("deci", &[N]),
                              fragment("viginti", &[M, S]),
                              fragment("triginta", &[N, S]),
                              fragment("quadraginta", &[N, S]),
                              fragment("quinquaginta", &[N, S]),
                              fragment("sexaginta", &[N]),
                              fragment("septuaginta", &[N]),
                              fragment("octoginta", &[M, X]),
                              fragment("nonaginta", &[])];

const HUNDREDS: [Fragment; 10] = [fragment("", &[]),
                                  fragment("centi", &[N, X]),
                                  fragment("ducenti", &[N]),
                                  fragment("trecenti", &[N, S]),
                                  fragment("quadringenti", &[N, S]),
                                  fragment("quingenti", &[N, S]),
                                  fragment("sescenti", &[N]),
                                  fragment("septingenti", &[N]),
                                  fragment("octingenti", &[M, X]),
                                  fragment("nongenti", &[])];

/// Prefixes used when a group is below ten.
const STANDALONE: [&str; 10] = ["ni", "mi", "bi", "tri", "quadri", "quinti", "sexti", "septi",
                                "octi", "noni"];

/// A euphony rule: `units` becomes `replacement` before a fragment carrying
/// `marker`.
#[derive(Debug, Clone, Copy)]
pub struct EuphonyRule {
    pub units:       &'static str,
    pub marker:      Marker,
    pub replacement: &'static str,
}

const fn rule(units: &'static str, marker: Marker, replacement: &'static str) -> EuphonyRule {
    EuphonyRule { units,
                  marker,
                  replacement }
}

/// Ordered; the first matching rule wins.
pub const EUPHONY_RULES: &[EuphonyRule] = &[rule("tre", S, "tres"),
                                            rule("tre", X, "tres"),
                                            rule("se", S, "ses"),
                                            rule("se", X, "sex"),
                                            rule("septe", M, "septem"),
                                            rule("septe", N, "septen"),
                                            rule("nove", M, "novem"),
                                            rule("nove", N, "noven")];

/// Applies the first euphony rule matching `units` and the markers of the
/// fragment that follows it.
///
/// # Example
/// ```
/// use numtext::numeral::latin::{Marker, euphony};
///
/// assert_eq!(euphony("tre", &[Marker::M, Marker::S]), "tres");
/// assert_eq!(euphony("se", &[Marker::M, Marker::X]), "sex");
/// assert_eq!(euphony("septe", &[Marker::N]), "septen");
/// assert_eq!(euphony("octo", &[Marker::N]), "octo");
/// ```
#[must_use]
pub fn euphony(units: &'static str, following: &[Marker]) -> &'static str {
    EUPHONY_RULES.iter()
                 .find(|r| r.units == units && following.contains(&r.marker))
                 .map_or(units, |r| r.replacement)
}

/// The Latin prefix of one group, before elision.
fn group_prefix(group: u16) -> String {
    let group = usize::from(group % 1000);
    if group < 10 {
        return STANDALONE[group].to_string();
    }

    let (units, tens, hundreds) = (group % 10, group / 10 % 10, group / 100);
    let (tens, hundreds) = (TENS[tens], HUNDREDS[hundreds]);
    let following = if tens.text.is_empty() { hundreds } else { tens };

    let mut prefix = String::from(euphony(UNITS[units], following.markers));
    prefix.push_str(tens.text);
    prefix.push_str(hundreds.text);
    prefix
}

/// The `…illi` segment contributed by one group.
///
/// # Example
/// ```
/// use numtext::numeral::latin::segment;
///
/// assert_eq!(segment(0), "nilli");
/// assert_eq!(segment(1), "milli");
/// assert_eq!(segment(23), "tresvigintilli");
/// ```
#[must_use]
pub fn segment(group: u16) -> String {
    let mut prefix = group_prefix(group);
    if prefix.ends_with(['a', 'e', 'i', 'o', 'u']) {
        prefix.pop();
    }
    prefix + "illi"
}

/// Splits `index` into base-1000 groups, most significant first.
fn groups(index: u64) -> Vec<u16> {
    let mut groups = Vec::new();
    let mut rest = index;
    loop {
        groups.push(u16::try_from(rest % 1000).unwrap_or_default());
        rest /= 1000;
        if rest == 0 {
            break;
        }
    }
    groups.reverse();
    groups
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next()
         .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
         .unwrap_or_default()
}

/// The name of `10^(3 * index + 3)`.
///
/// Index `0` is "Thousand".
///
/// # Example
/// ```
/// use numtext::numeral::latin::group_name;
///
/// assert_eq!(group_name(1), "Million");
/// assert_eq!(group_name(2), "Billion");
/// assert_eq!(group_name(10), "Decillion");
/// assert_eq!(group_name(1000), "Millinillion");
/// ```
#[must_use]
pub fn group_name(index: u64) -> String {
    if index == 0 {
        return "Thousand".to_string();
    }
    let mut name = groups(index).into_iter().map(segment).collect::<String>();
    name.push_str("on");
    capitalize(&name)
}

/// Segment text to group value, for all one thousand groups.
static SEGMENTS: LazyLock<HashMap<String, u16>> =
    LazyLock::new(|| (0..1000u16).map(|group| (segment(group), group)).collect());

/// Recovers the group index from a generated name, ignoring case.
///
/// Returns `None` unless `name` is exactly what [`group_name`] produces for
/// the recovered index.
///
/// # Example
/// ```
/// use numtext::numeral::latin::decode_group_name;
///
/// assert_eq!(decode_group_name("Decillion"), Some(10));
/// assert_eq!(decode_group_name("MILLINILLION"), Some(1000));
/// assert_eq!(decode_group_name("Gazillion"), None);
/// ```
#[must_use]
pub fn decode_group_name(name: &str) -> Option<u64> {
    let lower = name.to_ascii_lowercase();
    let body = lower.strip_suffix("on")?;

    let mut index = 0u64;
    let mut rest = body;
    while !rest.is_empty() {
        let end = rest.find("illi")? + "illi".len();
        let group = *SEGMENTS.get(&rest[..end])?;
        index = index.checked_mul(1000)?.checked_add(u64::from(group))?;
        rest = &rest[end..];
    }

    (index > 0 && group_name(index).eq_ignore_ascii_case(name)).then_some(index)
}
