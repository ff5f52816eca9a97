//! Currencies quoted by the central bank, keyed by the identifiers of its
//! CADIP table (<https://www.bcb.gov.br/fis/pstaw10/Tabela_Moedas_CADIP.txt>).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

/// Generates [`CurrencyCode`] and its lookups from a `CODE => id` table.
macro_rules! currency_catalog {
    (
        $( $code:ident => $id:literal ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum CurrencyCode {
            $($code),*
        }

        impl CurrencyCode {
            /// Identifier the remote service uses for this currency.
            pub const fn id(self) -> u16 {
                match self {
                    $(CurrencyCode::$code => $id),*
                }
            }

            pub const fn code(self) -> &'static str {
                match self {
                    $(CurrencyCode::$code => stringify!($code)),*
                }
            }

            pub fn from_id(id: u16) -> Option<CurrencyCode> {
                match id {
                    $($id => Some(CurrencyCode::$code),)*
                    _ => None,
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$code),*]
            }
        }
    };
}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        CurrencyCode::all()
            .iter()
            .copied()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

currency_catalog! {
    AFN => 5,
    ETB => 9,
    THB => 15,
    PAB => 20,
    VES => 25,
    BOB => 30,
    GHS => 35,
    CRC => 40,
    SVC => 45,
    NIO => 51,
    DKK => 55,
    EKK => 57,
    SKK => 58,
    ISK => 60,
    NOK => 65,
    SEK => 70,
    CZK => 75,
    GMD => 90,
    DZD => 95,
    KDW => 100,
    BHD => 105,
    IQD => 115,
    JOD => 125,
    LYD => 130,
    MKD => 132,
    RSD => 133,
    SDG => 134,
    TND => 135,
    SDR => 138,
    MAD => 139,
    AED => 145,
    STN => 148,
    AUD => 150,
    BSD => 155,
    BMD => 160,
    CAD => 165,
    GYD => 170,
    NAD => 173,
    BBD => 175,
    BZD => 180,
    BND => 185,
    KYD => 190,
    SGD => 195,
    FJD => 200,
    HKD => 205,
    TTD => 210,
    XCD => 215,
    ZWL => 217,
    USD => 220,
    JMD => 230,
    LRD => 235,
    NZD => 245,
    SBD => 250,
    VND => 260,
    AMD => 275,
    CVE => 295,
    ANG => 325,
    AWG => 328,
    HUF => 345,
    BIF => 365,
    KMF => 368,
    XOF => 370,
    XPF => 380,
    DJF => 390,
    GNF => 398,
    MGA => 405,
    RWF => 420,
    CHF => 425,
    HTG => 440,
    PYG => 450,
    UAH => 460,
    JPY => 470,
    GEL => 482,
    LVL => 485,
    ALL => 490,
    HNL => 495,
    SLL => 500,
    MDL => 503,
    RON => 505,
    BGN => 510,
    GIP => 530,
    EGP => 535,
    GBP => 540,
    LBP => 560,
    SHP => 570,
    SYP => 575,
    SZL => 585,
    TRY => 600,
    LTL => 601,
    LSL => 603,
    AZN => 607,
    BAM => 612,
    MZN => 620,
    ERN => 625,
    NGN => 630,
    AOA => 635,
    TWD => 640,
    PEN => 660,
    BTN => 665,
    TOP => 680,
    MOP => 685,
    ARS => 706,
    CLP => 715,
    COP => 720,
    CUP => 725,
    DOP => 730,
    PHP => 735,
    GWP => 738,
    MXN => 741,
    UYU => 745,
    BWP => 755,
    MWK => 760,
    ZMW => 765,
    GTQ => 770,
    MMK => 775,
    PGK => 778,
    HRK => 779,
    LAK => 780,
    ZAR => 785,
    BRL => 790,
    CNY => 795,
    QAR => 800,
    OMR => 805,
    YER => 810,
    IRR => 815,
    SAR => 820,
    KHR => 825,
    MYR => 828,
    BYN => 829,
    RUB => 830,
    MUR => 840,
    NPR => 845,
    SCR => 850,
    LKR => 855,
    INR => 860,
    IDR => 865,
    MVR => 870,
    PKR => 875,
    ILS => 880,
    UZS => 893,
    BDT => 905,
    WST => 911,
    KZT => 913,
    MNT => 915,
    XEU => 918,
    VUV => 920,
    KPW => 925,
    KRW => 930,
    TZS => 946,
    KES => 950,
    UGX => 955,
    SOS => 960,
    PLN => 975,
    EUR => 978,
}
