//! Demonstration text containing one or more values of every category.

/// Sample paragraph used by the front ends' "load example" actions.
///
/// Contains the emails `juan.perez@example.com` and `contacto@empresa.co`, the
/// phone `+57 300 4567890`, the date `29/02/2024`, the ID `1029384756`, the
/// postal code `110111`, the URLs `https://www.tecnored.com` and
/// `http://blog.tecnored.com`, and the plates `ABC-123` and `CD456EF`.
pub const SAMPLE_TEXT: &str = "
Hi, my email is juan.perez@example.com and my phone number is +57 300 4567890.
You can also write to contacto@empresa.co.
I was born on 29/02/2024 and my ID number is 1029384756.
My postal code is 110111.
Visit our website: https://www.tecnored.com or http://blog.tecnored.com.
My car's plate is ABC-123 and my motorcycle's is CD456EF.
";
