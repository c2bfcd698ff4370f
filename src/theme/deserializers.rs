use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[String; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.len() == 0 {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use smallvec::SmallVec;

    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "de_string_or_non_empty_list")]
        content: SmallVec<[String; 1]>,
    }

    #[test]
    fn test_single_glob_string_becomes_a_list() {
        let holder: Holder =
            serde_json::from_str(r#"{"content": "./templates/**/*.html"}"#).unwrap();
        assert_eq!(holder.content.as_slice(), ["./templates/**/*.html"]);
    }

    #[test]
    fn test_list_of_globs_is_kept() {
        let holder: Holder =
            serde_json::from_str(r#"{"content": ["./templates/**/*.html", "./static/**/*.html"]}"#)
                .unwrap();
        assert_eq!(holder.content.len(), 2);
    }

    #[test]
    fn test_empty_glob_list_is_rejected() {
        assert!(serde_json::from_str::<Holder>(r#"{"content": []}"#).is_err());
    }
}
