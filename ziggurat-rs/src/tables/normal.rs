//! Normal ziggurat strip tables, one per float width.
//!
//! Entry 0 is the virtual width of the base strip (its area divided by the
//! density at the tail edge). Entries `1..=N` are strip edges, from the tail
//! edge down towards the mode.
//!
//! Generated by `zigtable --width f64` and `zigtable --width f32`.
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

/// `table_bits = 7`, 128 strips.
pub static NORMAL_F64: [f64; 129] = [
    3.71308624674036292, 3.44261985589665231, 3.22308498457861869, 3.083228858214214,
    2.97869625264501714, 2.89434400701867078, 2.82312535054596658, 2.76116937238415394,
    2.70611357311872291, 2.65640641125819288, 2.61097224842861353, 2.56903362592163953,
    2.53000967238546703, 2.49345452209195129, 2.4590181774083506, 2.42642064553021219,
    2.395434278007468, 2.36587137011398818, 2.3375752413355313, 2.31041368369500244,
    2.28427405967365704, 2.25905957386533007, 2.23468639558705728, 2.21108140887472837,
    2.18818043207202084, 2.16592679374484121, 2.14427018235626177, 2.1231657086697906,
    2.10257313518499966, 2.08245623798772517, 2.0627822745039639, 2.04352153665067027,
    2.02464697337293442, 2.00613386995896725, 1.98795957412306135, 1.97010326084971399,
    1.9525457295488895, 1.93526922829190084, 1.91825730085973256, 1.90149465310031829,
    1.88496703570286983, 1.86866114098954261, 1.85256451172308778, 1.83666546025338473,
    1.82095299659100562, 1.80541676421404929, 1.79004698259461947, 1.77483439558076972,
    1.7597702248942324, 1.74484612810837714, 1.73005416055824424, 1.71538674070811714,
    1.70083661856430157, 1.68639684677348689, 1.67206075409185284, 1.65782192094820813,
    1.64367415685698326, 1.62961147946467899, 1.61562809503713356, 1.6017183802152779,
    1.5878768648844015, 1.57409821601675048, 1.56037722235984133, 1.54670877985350419,
    1.53308787766755672, 1.51950958475937159, 1.50596903685655104, 1.49246142377461632,
    1.47898197698309875, 1.46552595733579549, 1.45208864288221728, 1.43866531667746189,
    1.4252512545068623, 1.41184171243976109, 1.39843191412360701, 1.38501703772514939,
    1.3715922024197329, 1.35815245432242371, 1.3446927517457139, 1.33120794965767741,
    1.31769278320134386, 1.30414185012042227, 1.29054959191787399, 1.27691027355170061,
    1.26321796144602927, 1.24946649956433475, 1.23564948325448198, 1.22176023053096339,
    1.20779175040675857, 1.19373670782377306, 1.17958738465446178, 1.16533563615504776,
    1.1509728421389771, 1.1364898520030764, 1.12187692257225491, 1.1071236475235362,
    1.09221887689655461, 1.07715062488193869, 1.06190596368362034, 1.0464709007525812,
    1.03083023605645652, 1.01496739523930057, 0.998864233480644681, 0.982500803502761477,
    0.965855079388131865, 0.948902625497913155, 0.931616196601354973, 0.913965251008802881,
    0.895915352566239664, 0.877427429097716982, 0.858456843178052043, 0.838952214281208697,
    0.818853906683319033, 0.798092060626276134, 0.776583987876149906, 0.754230664434511699,
    0.730911910621882877, 0.706479611313609812, 0.680747918645906114, 0.653478638715044413,
    0.62435859730909038, 0.592962942441980445, 0.558692178375520654, 0.520656038725148096,
    0.477437837253791464, 0.426547986303309479, 0.362871431028424229, 0.272320864704672982,
    8.56006539842194211e-08,
];

/// `table_bits = 6`, 64 strips.
pub static NORMAL_F32: [f32; 65] = [
    3.50081842773648955, 3.21365762715889591, 2.97554754881216521, 2.82144173376693885,
    2.70489844087623688, 2.60989649488420428, 2.52893818055769248, 2.45788839279942994,
    2.39421523845594875, 2.33625117378433123, 2.28283699547705776, 2.23313255110904807,
    2.18650831817393421, 2.14247956780223436, 2.10066445668385615, 2.06075629127443483,
    2.02250456055679084, 1.98570159735051432, 1.95017296799230566, 1.91577039970579421,
    1.88236647661245393, 1.84985059426788356, 1.81812582627706765, 1.78710646266994977,
    1.75671605011405751, 1.72688581168949273, 1.69755335679085184, 1.66866161471829555,
    1.64015794185166186, 1.6119933640360713, 1.5841219243153446, 1.55650011235143482,
    1.52908635638906443, 1.50184056189162751, 1.47472368327741021, 1.44769731671762392,
    1.42072330284074644, 1.39376332848490625, 1.36677851636469305, 1.33972899063425777,
    1.31257340474236162, 1.28526841552519544, 1.25776808391335959, 1.23002317755043933,
    1.20198034344336935, 1.17358110859669207, 1.14476065205546296, 1.11544627076287162,
    1.0855554307417723, 1.05499324883108803, 1.02364917937607958, 0.991392569150979952,
    0.958066564500759221, 0.923479555960606491, 0.887392829130670746, 0.849502158378425687,
    0.809409309968142643, 0.766575850614967247, 0.720243901405768661, 0.669289993925723414,
    0.611928516240314524, 0.545024000113080387, 0.462137341038639904, 0.345538574723512071,
    1.05367121277235375e-07,
];
