//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝


#[cfg(test)]
mod passing {
    use spider_parse::{split_multi, split_multi_default, DEFAULT_SPLIT_CHARS};

    #[test]
    fn tab_space_comma() {
        let parts = split_multi("a\tb a,c", &["\t", " ", ","], false).unwrap();

        assert_eq!(parts, vec!["a", "b", "a", "c"]);
    }

    #[test]
    fn keeps_empty_fragments() {
        let parts = split_multi("a,,b c", &[",", " "], false).unwrap();

        assert_eq!(parts, vec!["a", "", "b", "c"]);
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let parts = split_multi(" a ; b", &[";", ","], false).unwrap();

        assert_eq!(parts, vec![" a ", " b"]);
    }

    #[test]
    fn remove_empty() {
        let parts = split_multi("asd\tas asdd\ta asd\tas", &DEFAULT_SPLIT_CHARS, true).unwrap();

        assert_eq!(parts, vec!["asd", "as", "asdd", "a", "asd", "as"]);
    }

    #[test]
    fn remove_empty_trims_fragments() {
        let parts = split_multi(" a , b ,, ", &[",", ";"], true).unwrap();

        assert_eq!(parts, vec!["a", "b"]);
    }

    #[test]
    fn preserves_encounter_order() {
        let parts = split_multi("1;2,3;4", &[",", ";"], false).unwrap();

        assert_eq!(parts, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn empty_text() {
        assert_eq!(split_multi("", &[",", ";"], false).unwrap(), vec![""]);
        assert!(split_multi("", &[",", ";"], true).unwrap().is_empty());
    }

    #[test]
    fn default_delimiters() {
        assert_eq!(
            split_multi_default("x, y\tz", true),
            vec!["x", "y", "z"]
        );
        assert_eq!(
            split_multi_default("x, y", false),
            vec!["x", "", "y"]
        );
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use spider_parse::{split_multi, SpiderParseError};

    #[test]
    fn single_delimiter() {
        let result = split_multi("x", &["a"], false);

        assert!(matches!(result, Err(SpiderParseError::InvalidArgument(_))));
    }

    #[test]
    fn no_delimiters() {
        let result = split_multi("x", &[], true);

        assert!(matches!(result, Err(SpiderParseError::InvalidArgument(_))));
    }

    #[test]
    fn empty_delimiter() {
        let result = split_multi("x", &[",", ""], false);

        assert!(matches!(result, Err(SpiderParseError::InvalidArgument(_))));
    }
}
