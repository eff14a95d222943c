use breaker_core::{decrypt, encrypt, Keyword, Text, VigenereCipher};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(plain in "[a-z]{0,300}", key in "[a-z]{1,20}") {
        let sealed = encrypt(&plain, &key).unwrap();
        prop_assert_eq!(decrypt(&sealed, &key).unwrap(), plain);
    }

    #[test]
    fn length_is_preserved(plain in "[a-z]{0,300}", key in "[a-z]{1,20}") {
        let cipher = VigenereCipher::new(Keyword::new(&key).unwrap());
        let text = Text::new(&plain).unwrap();
        let sealed = cipher.encrypt(&text);
        prop_assert_eq!(sealed.len(), text.len());
        prop_assert_eq!(cipher.decrypt(&sealed).len(), sealed.len());
    }

    #[test]
    fn key_of_only_a_is_identity(plain in "[a-z]{0,100}", n in 1usize..10) {
        let key = "a".repeat(n);
        prop_assert_eq!(encrypt(&plain, &key).unwrap(), plain.clone());
        prop_assert_eq!(decrypt(&plain, &key).unwrap(), plain);
    }

    #[test]
    fn sanitized_text_is_always_valid(raw in ".{0,200}") {
        let text = Text::sanitize(&raw);
        prop_assert!(Text::new(text.as_str()).is_ok());
    }
}
