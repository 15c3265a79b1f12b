//!
//! Registry of standard named curves
//!
//! Domain parameters collected from several standards, all over prime
//! fields; look one up by name with [`domain_parameters`].
//!

use crate::domain::DomainParameters;
use crate::errors::{Error, Result};
use crate::modp::{ModInt, PrimeField};
use crate::weierstrass::EllipticCurve;
use num_bigint::{BigInt, BigUint};

/// The names every entry of the registry answers to.
pub const NAMES: [&str; 9] = [
    "Anomalous",
    "NIST P-224",
    "BN(2,254)",
    "brainpoolP256t1",
    "ANSSI FRP256v1",
    "NIST P-256",
    "secp256k1",
    "brainpoolP384t1",
    "NIST P-384",
];

struct CurveEntry {
    name: &'static str,
    p: &'static str,
    a: &'static str,
    b: &'static str,
    gx: &'static str,
    gy: &'static str,
    order: &'static str,
}

const CURVES: &[CurveEntry] = &[
    CurveEntry {
        name: "Anomalous",
        p: "17676318486848893030961583018778670610489016512983351739677143",
        a: "15347898055371580590890576721314318823207531963035637503096292",
        b: "7444386449934505970367865204569124728350661870959593404279615",
        gx: "1619092589586542907492569170434842128165755668543894279235270",
        gy: "3436949547626524920645513316569700140535482973634182925459687",
        order: "17676318486848893030961583018778670610489016512983351739677143",
    },
    CurveEntry {
        name: "NIST P-224",
        p: "26959946667150639794667015087019630673557916260026308143510066298881",
        a: "-3",
        b: "18958286285566608000408668544493926415504680968679321075787234672564",
        gx: "19277929113566293071110308034699488026831934219452440156649784352033",
        gy: "19926808758034470970197974370888749184205991990603949537637343198772",
        order: "26959946667150639794667015087019625940457807714424391721682722368061",
    },
    CurveEntry {
        name: "BN(2,254)",
        p: "16798108731015832284940804142231733909889187121439069848933715426072753864723",
        a: "0",
        b: "2",
        gx: "-1",
        gy: "1",
        order: "16798108731015832284940804142231733909759579603404752749028378864165570215949",
    },
    CurveEntry {
        name: "brainpoolP256t1",
        p: "76884956397045344220809746629001649093037950200943055203735601445031516197751",
        a: "-3",
        b: "46214326585032579593829631435610129746736367449296220983687490401182983727876",
        gx: "74138526386500101787937404544159543470173440588427591213843535686338908194292",
        gy: "20625154686056605250529482107801269759951443923312408063441227608803066104254",
        order: "76884956397045344220809746629001649092737531784414529538755519063063536359079",
    },
    CurveEntry {
        name: "ANSSI FRP256v1",
        p: "109454571331697278617670725030735128145969349647868738157201323556196022393859",
        a: "-3",
        b: "107744541122042688792155207242782455150382764043089114141096634497567301547839",
        gx: "82638672503301278923015998535776227331280144783487139112686874194432446389503",
        gy: "43992510890276411535679659957604584722077886330284298232193264058442323471611",
        order: "109454571331697278617670725030735128146004546811402412653072203207726079563233",
    },
    CurveEntry {
        name: "NIST P-256",
        p: "115792089210356248762697446949407573530086143415290314195533631308867097853951",
        a: "-3",
        b: "41058363725152142129326129780047268409114441015993725554835256314039467401291",
        gx: "48439561293906451759052585252797914202762949526041747995844080717082404635286",
        gy: "36134250956749795798585127919587881956611106672985015071877198253568414405109",
        order: "115792089210356248762697446949407573529996955224135760342422259061068512044369",
    },
    CurveEntry {
        name: "secp256k1",
        p: "115792089237316195423570985008687907853269984665640564039457584007908834671663",
        a: "0",
        b: "7",
        gx: "55066263022277343669578718895168534326250603453777594175500187360389116729240",
        gy: "32670510020758816978083085130507043184471273380659243275938904335757337482424",
        order: "115792089237316195423570985008687907852837564279074904382605163141518161494337",
    },
    CurveEntry {
        name: "brainpoolP384t1",
        p: "21659270770119316173069236842332604979796116387017648600081618503821089934025961822236561982844534088440708417973331",
        a: "-3",
        b: "19596161053329239268181228455226581162286252326261019516900162717091837027531392576647644262320816848087868142547438",
        gx: "3827769047710394604076870463731979903132904572714069494181204655675960538951736634566672590576020545838501853661388",
        gy: "5797643717699939326787282953388004860198302425468870641753455602553471777319089854136002629714659021021358409132328",
        order: "21659270770119316173069236842332604979796116387017648600075645274821611501358515537962695117368903252229601718723941",
    },
    CurveEntry {
        name: "NIST P-384",
        p: "39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112319",
        a: "-3",
        b: "27580193559959705877849011840389048093056905856361568521428707301988689241309860865136260764883745107765439761230575",
        gx: "26247035095799689268623156744566981891852923491109213387815615900925518854738050089022388053975719786650872476732087",
        gy: "8325710961489029985546751289520108179287853048861315594709205902480503199884419224438643760392947333078086511627871",
        order: "39402006196394479212279040100143613805079739270465446667946905279627659399113263569398956308152294913554433653942643",
    },
];

fn parse_unsigned(digits: &str) -> Result<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(Error::InvalidParameters)
}

fn parse_signed(digits: &str) -> Result<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(Error::InvalidParameters)
}

fn build(entry: &CurveEntry) -> Result<DomainParameters<ModInt>> {
    let field = PrimeField::new(parse_unsigned(entry.p)?)?;
    let a = field.element(parse_signed(entry.a)?);
    let b = field.element(parse_signed(entry.b)?);
    let curve = EllipticCurve::new(a, b)?;
    let generator = curve.point(
        field.element(parse_signed(entry.gx)?),
        field.element(parse_signed(entry.gy)?),
    )?;
    Ok(DomainParameters {
        curve,
        generator,
        order: parse_unsigned(entry.order)?,
    })
}

/// Look up the domain parameters `(E, G, n)` of a named curve.
///
/// Returns `None` for an unknown name.
///
/// ```
/// use ecckit::named_curves::domain_parameters;
///
/// let params = domain_parameters("secp256k1").unwrap();
/// assert_eq!(params.curve.a(), &0);
/// assert_eq!(params.curve.b(), &7);
/// ```
pub fn domain_parameters(name: &str) -> Option<DomainParameters<ModInt>> {
    let entry = CURVES.iter().find(|entry| entry.name == name)?;
    build(entry).ok()
}
