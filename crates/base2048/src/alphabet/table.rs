//! Forward alphabet: the last 2048 Unicode letters (Lu, Ll, Lo) at or below
//! U+10F3, in code point order. Generated once; do not edit by hand.
//!
//! This table is specific to this crate. Other base2048 implementations use
//! different forward tables, so their output does not decode here and vice
//! versa.

/// Symbol for each 11-bit value.
pub const ENC_TABLE: [char; 2048] = [
    '\u{01E5}', '\u{01E6}', '\u{01E7}', '\u{01E8}', '\u{01E9}', '\u{01EA}', '\u{01EB}', '\u{01EC}',
    '\u{01ED}', '\u{01EE}', '\u{01EF}', '\u{01F0}', '\u{01F1}', '\u{01F3}', '\u{01F4}', '\u{01F5}',
    '\u{01F6}', '\u{01F7}', '\u{01F8}', '\u{01F9}', '\u{01FA}', '\u{01FB}', '\u{01FC}', '\u{01FD}',
    '\u{01FE}', '\u{01FF}', '\u{0200}', '\u{0201}', '\u{0202}', '\u{0203}', '\u{0204}', '\u{0205}',
    '\u{0206}', '\u{0207}', '\u{0208}', '\u{0209}', '\u{020A}', '\u{020B}', '\u{020C}', '\u{020D}',
    '\u{020E}', '\u{020F}', '\u{0210}', '\u{0211}', '\u{0212}', '\u{0213}', '\u{0214}', '\u{0215}',
    '\u{0216}', '\u{0217}', '\u{0218}', '\u{0219}', '\u{021A}', '\u{021B}', '\u{021C}', '\u{021D}',
    '\u{021E}', '\u{021F}', '\u{0220}', '\u{0221}', '\u{0222}', '\u{0223}', '\u{0224}', '\u{0225}',
    '\u{0226}', '\u{0227}', '\u{0228}', '\u{0229}', '\u{022A}', '\u{022B}', '\u{022C}', '\u{022D}',
    '\u{022E}', '\u{022F}', '\u{0230}', '\u{0231}', '\u{0232}', '\u{0233}', '\u{0234}', '\u{0235}',
    '\u{0236}', '\u{0237}', '\u{0238}', '\u{0239}', '\u{023A}', '\u{023B}', '\u{023C}', '\u{023D}',
    '\u{023E}', '\u{023F}', '\u{0240}', '\u{0241}', '\u{0242}', '\u{0243}', '\u{0244}', '\u{0245}',
    '\u{0246}', '\u{0247}', '\u{0248}', '\u{0249}', '\u{024A}', '\u{024B}', '\u{024C}', '\u{024D}',
    '\u{024E}', '\u{024F}', '\u{0250}', '\u{0251}', '\u{0252}', '\u{0253}', '\u{0254}', '\u{0255}',
    '\u{0256}', '\u{0257}', '\u{0258}', '\u{0259}', '\u{025A}', '\u{025B}', '\u{025C}', '\u{025D}',
    '\u{025E}', '\u{025F}', '\u{0260}', '\u{0261}', '\u{0262}', '\u{0263}', '\u{0264}', '\u{0265}',
    '\u{0266}', '\u{0267}', '\u{0268}', '\u{0269}', '\u{026A}', '\u{026B}', '\u{026C}', '\u{026D}',
    '\u{026E}', '\u{026F}', '\u{0270}', '\u{0271}', '\u{0272}', '\u{0273}', '\u{0274}', '\u{0275}',
    '\u{0276}', '\u{0277}', '\u{0278}', '\u{0279}', '\u{027A}', '\u{027B}', '\u{027C}', '\u{027D}',
    '\u{027E}', '\u{027F}', '\u{0280}', '\u{0281}', '\u{0282}', '\u{0283}', '\u{0284}', '\u{0285}',
    '\u{0286}', '\u{0287}', '\u{0288}', '\u{0289}', '\u{028A}', '\u{028B}', '\u{028C}', '\u{028D}',
    '\u{028E}', '\u{028F}', '\u{0290}', '\u{0291}', '\u{0292}', '\u{0293}', '\u{0294}', '\u{0295}',
    '\u{0296}', '\u{0297}', '\u{0298}', '\u{0299}', '\u{029A}', '\u{029B}', '\u{029C}', '\u{029D}',
    '\u{029E}', '\u{029F}', '\u{02A0}', '\u{02A1}', '\u{02A2}', '\u{02A3}', '\u{02A4}', '\u{02A5}',
    '\u{02A6}', '\u{02A7}', '\u{02A8}', '\u{02A9}', '\u{02AA}', '\u{02AB}', '\u{02AC}', '\u{02AD}',
    '\u{02AE}', '\u{02AF}', '\u{0370}', '\u{0371}', '\u{0372}', '\u{0373}', '\u{0376}', '\u{0377}',
    '\u{037B}', '\u{037C}', '\u{037D}', '\u{037F}', '\u{0386}', '\u{0388}', '\u{0389}', '\u{038A}',
    '\u{038C}', '\u{038E}', '\u{038F}', '\u{0390}', '\u{0391}', '\u{0392}', '\u{0393}', '\u{0394}',
    '\u{0395}', '\u{0396}', '\u{0397}', '\u{0398}', '\u{0399}', '\u{039A}', '\u{039B}', '\u{039C}',
    '\u{039D}', '\u{039E}', '\u{039F}', '\u{03A0}', '\u{03A1}', '\u{03A3}', '\u{03A4}', '\u{03A5}',
    '\u{03A6}', '\u{03A7}', '\u{03A8}', '\u{03A9}', '\u{03AA}', '\u{03AB}', '\u{03AC}', '\u{03AD}',
    '\u{03AE}', '\u{03AF}', '\u{03B0}', '\u{03B1}', '\u{03B2}', '\u{03B3}', '\u{03B4}', '\u{03B5}',
    '\u{03B6}', '\u{03B7}', '\u{03B8}', '\u{03B9}', '\u{03BA}', '\u{03BB}', '\u{03BC}', '\u{03BD}',
    '\u{03BE}', '\u{03BF}', '\u{03C0}', '\u{03C1}', '\u{03C2}', '\u{03C3}', '\u{03C4}', '\u{03C5}',
    '\u{03C6}', '\u{03C7}', '\u{03C8}', '\u{03C9}', '\u{03CA}', '\u{03CB}', '\u{03CC}', '\u{03CD}',
    '\u{03CE}', '\u{03CF}', '\u{03D0}', '\u{03D1}', '\u{03D2}', '\u{03D3}', '\u{03D4}', '\u{03D5}',
    '\u{03D6}', '\u{03D7}', '\u{03D8}', '\u{03D9}', '\u{03DA}', '\u{03DB}', '\u{03DC}', '\u{03DD}',
    '\u{03DE}', '\u{03DF}', '\u{03E0}', '\u{03E1}', '\u{03E2}', '\u{03E3}', '\u{03E4}', '\u{03E5}',
    '\u{03E6}', '\u{03E7}', '\u{03E8}', '\u{03E9}', '\u{03EA}', '\u{03EB}', '\u{03EC}', '\u{03ED}',
    '\u{03EE}', '\u{03EF}', '\u{03F0}', '\u{03F1}', '\u{03F2}', '\u{03F3}', '\u{03F4}', '\u{03F5}',
    '\u{03F7}', '\u{03F8}', '\u{03F9}', '\u{03FA}', '\u{03FB}', '\u{03FC}', '\u{03FD}', '\u{03FE}',
    '\u{03FF}', '\u{0400}', '\u{0401}', '\u{0402}', '\u{0403}', '\u{0404}', '\u{0405}', '\u{0406}',
    '\u{0407}', '\u{0408}', '\u{0409}', '\u{040A}', '\u{040B}', '\u{040C}', '\u{040D}', '\u{040E}',
    '\u{040F}', '\u{0410}', '\u{0411}', '\u{0412}', '\u{0413}', '\u{0414}', '\u{0415}', '\u{0416}',
    '\u{0417}', '\u{0418}', '\u{0419}', '\u{041A}', '\u{041B}', '\u{041C}', '\u{041D}', '\u{041E}',
    '\u{041F}', '\u{0420}', '\u{0421}', '\u{0422}', '\u{0423}', '\u{0424}', '\u{0425}', '\u{0426}',
    '\u{0427}', '\u{0428}', '\u{0429}', '\u{042A}', '\u{042B}', '\u{042C}', '\u{042D}', '\u{042E}',
    '\u{042F}', '\u{0430}', '\u{0431}', '\u{0432}', '\u{0433}', '\u{0434}', '\u{0435}', '\u{0436}',
    '\u{0437}', '\u{0438}', '\u{0439}', '\u{043A}', '\u{043B}', '\u{043C}', '\u{043D}', '\u{043E}',
    '\u{043F}', '\u{0440}', '\u{0441}', '\u{0442}', '\u{0443}', '\u{0444}', '\u{0445}', '\u{0446}',
    '\u{0447}', '\u{0448}', '\u{0449}', '\u{044A}', '\u{044B}', '\u{044C}', '\u{044D}', '\u{044E}',
    '\u{044F}', '\u{0450}', '\u{0451}', '\u{0452}', '\u{0453}', '\u{0454}', '\u{0455}', '\u{0456}',
    '\u{0457}', '\u{0458}', '\u{0459}', '\u{045A}', '\u{045B}', '\u{045C}', '\u{045D}', '\u{045E}',
    '\u{045F}', '\u{0460}', '\u{0461}', '\u{0462}', '\u{0463}', '\u{0464}', '\u{0465}', '\u{0466}',
    '\u{0467}', '\u{0468}', '\u{0469}', '\u{046A}', '\u{046B}', '\u{046C}', '\u{046D}', '\u{046E}',
    '\u{046F}', '\u{0470}', '\u{0471}', '\u{0472}', '\u{0473}', '\u{0474}', '\u{0475}', '\u{0476}',
    '\u{0477}', '\u{0478}', '\u{0479}', '\u{047A}', '\u{047B}', '\u{047C}', '\u{047D}', '\u{047E}',
    '\u{047F}', '\u{0480}', '\u{0481}', '\u{048A}', '\u{048B}', '\u{048C}', '\u{048D}', '\u{048E}',
    '\u{048F}', '\u{0490}', '\u{0491}', '\u{0492}', '\u{0493}', '\u{0494}', '\u{0495}', '\u{0496}',
    '\u{0497}', '\u{0498}', '\u{0499}', '\u{049A}', '\u{049B}', '\u{049C}', '\u{049D}', '\u{049E}',
    '\u{049F}', '\u{04A0}', '\u{04A1}', '\u{04A2}', '\u{04A3}', '\u{04A4}', '\u{04A5}', '\u{04A6}',
    '\u{04A7}', '\u{04A8}', '\u{04A9}', '\u{04AA}', '\u{04AB}', '\u{04AC}', '\u{04AD}', '\u{04AE}',
    '\u{04AF}', '\u{04B0}', '\u{04B1}', '\u{04B2}', '\u{04B3}', '\u{04B4}', '\u{04B5}', '\u{04B6}',
    '\u{04B7}', '\u{04B8}', '\u{04B9}', '\u{04BA}', '\u{04BB}', '\u{04BC}', '\u{04BD}', '\u{04BE}',
    '\u{04BF}', '\u{04C0}', '\u{04C1}', '\u{04C2}', '\u{04C3}', '\u{04C4}', '\u{04C5}', '\u{04C6}',
    '\u{04C7}', '\u{04C8}', '\u{04C9}', '\u{04CA}', '\u{04CB}', '\u{04CC}', '\u{04CD}', '\u{04CE}',
    '\u{04CF}', '\u{04D0}', '\u{04D1}', '\u{04D2}', '\u{04D3}', '\u{04D4}', '\u{04D5}', '\u{04D6}',
    '\u{04D7}', '\u{04D8}', '\u{04D9}', '\u{04DA}', '\u{04DB}', '\u{04DC}', '\u{04DD}', '\u{04DE}',
    '\u{04DF}', '\u{04E0}', '\u{04E1}', '\u{04E2}', '\u{04E3}', '\u{04E4}', '\u{04E5}', '\u{04E6}',
    '\u{04E7}', '\u{04E8}', '\u{04E9}', '\u{04EA}', '\u{04EB}', '\u{04EC}', '\u{04ED}', '\u{04EE}',
    '\u{04EF}', '\u{04F0}', '\u{04F1}', '\u{04F2}', '\u{04F3}', '\u{04F4}', '\u{04F5}', '\u{04F6}',
    '\u{04F7}', '\u{04F8}', '\u{04F9}', '\u{04FA}', '\u{04FB}', '\u{04FC}', '\u{04FD}', '\u{04FE}',
    '\u{04FF}', '\u{0500}', '\u{0501}', '\u{0502}', '\u{0503}', '\u{0504}', '\u{0505}', '\u{0506}',
    '\u{0507}', '\u{0508}', '\u{0509}', '\u{050A}', '\u{050B}', '\u{050C}', '\u{050D}', '\u{050E}',
    '\u{050F}', '\u{0510}', '\u{0511}', '\u{0512}', '\u{0513}', '\u{0514}', '\u{0515}', '\u{0516}',
    '\u{0517}', '\u{0518}', '\u{0519}', '\u{051A}', '\u{051B}', '\u{051C}', '\u{051D}', '\u{051E}',
    '\u{051F}', '\u{0520}', '\u{0521}', '\u{0522}', '\u{0523}', '\u{0524}', '\u{0525}', '\u{0526}',
    '\u{0527}', '\u{0528}', '\u{0529}', '\u{052A}', '\u{052B}', '\u{052C}', '\u{052D}', '\u{052E}',
    '\u{052F}', '\u{0531}', '\u{0532}', '\u{0533}', '\u{0534}', '\u{0535}', '\u{0536}', '\u{0537}',
    '\u{0538}', '\u{0539}', '\u{053A}', '\u{053B}', '\u{053C}', '\u{053D}', '\u{053E}', '\u{053F}',
    '\u{0540}', '\u{0541}', '\u{0542}', '\u{0543}', '\u{0544}', '\u{0545}', '\u{0546}', '\u{0547}',
    '\u{0548}', '\u{0549}', '\u{054A}', '\u{054B}', '\u{054C}', '\u{054D}', '\u{054E}', '\u{054F}',
    '\u{0550}', '\u{0551}', '\u{0552}', '\u{0553}', '\u{0554}', '\u{0555}', '\u{0556}', '\u{0560}',
    '\u{0561}', '\u{0562}', '\u{0563}', '\u{0564}', '\u{0565}', '\u{0566}', '\u{0567}', '\u{0568}',
    '\u{0569}', '\u{056A}', '\u{056B}', '\u{056C}', '\u{056D}', '\u{056E}', '\u{056F}', '\u{0570}',
    '\u{0571}', '\u{0572}', '\u{0573}', '\u{0574}', '\u{0575}', '\u{0576}', '\u{0577}', '\u{0578}',
    '\u{0579}', '\u{057A}', '\u{057B}', '\u{057C}', '\u{057D}', '\u{057E}', '\u{057F}', '\u{0580}',
    '\u{0581}', '\u{0582}', '\u{0583}', '\u{0584}', '\u{0585}', '\u{0586}', '\u{0587}', '\u{0588}',
    '\u{05D0}', '\u{05D1}', '\u{05D2}', '\u{05D3}', '\u{05D4}', '\u{05D5}', '\u{05D6}', '\u{05D7}',
    '\u{05D8}', '\u{05D9}', '\u{05DA}', '\u{05DB}', '\u{05DC}', '\u{05DD}', '\u{05DE}', '\u{05DF}',
    '\u{05E0}', '\u{05E1}', '\u{05E2}', '\u{05E3}', '\u{05E4}', '\u{05E5}', '\u{05E6}', '\u{05E7}',
    '\u{05E8}', '\u{05E9}', '\u{05EA}', '\u{05EF}', '\u{05F0}', '\u{05F1}', '\u{05F2}', '\u{0620}',
    '\u{0621}', '\u{0622}', '\u{0623}', '\u{0624}', '\u{0625}', '\u{0626}', '\u{0627}', '\u{0628}',
    '\u{0629}', '\u{062A}', '\u{062B}', '\u{062C}', '\u{062D}', '\u{062E}', '\u{062F}', '\u{0630}',
    '\u{0631}', '\u{0632}', '\u{0633}', '\u{0634}', '\u{0635}', '\u{0636}', '\u{0637}', '\u{0638}',
    '\u{0639}', '\u{063A}', '\u{063B}', '\u{063C}', '\u{063D}', '\u{063E}', '\u{063F}', '\u{0641}',
    '\u{0642}', '\u{0643}', '\u{0644}', '\u{0645}', '\u{0646}', '\u{0647}', '\u{0648}', '\u{0649}',
    '\u{064A}', '\u{066E}', '\u{066F}', '\u{0671}', '\u{0672}', '\u{0673}', '\u{0674}', '\u{0675}',
    '\u{0676}', '\u{0677}', '\u{0678}', '\u{0679}', '\u{067A}', '\u{067B}', '\u{067C}', '\u{067D}',
    '\u{067E}', '\u{067F}', '\u{0680}', '\u{0681}', '\u{0682}', '\u{0683}', '\u{0684}', '\u{0685}',
    '\u{0686}', '\u{0687}', '\u{0688}', '\u{0689}', '\u{068A}', '\u{068B}', '\u{068C}', '\u{068D}',
    '\u{068E}', '\u{068F}', '\u{0690}', '\u{0691}', '\u{0692}', '\u{0693}', '\u{0694}', '\u{0695}',
    '\u{0696}', '\u{0697}', '\u{0698}', '\u{0699}', '\u{069A}', '\u{069B}', '\u{069C}', '\u{069D}',
    '\u{069E}', '\u{069F}', '\u{06A0}', '\u{06A1}', '\u{06A2}', '\u{06A3}', '\u{06A4}', '\u{06A5}',
    '\u{06A6}', '\u{06A7}', '\u{06A8}', '\u{06A9}', '\u{06AA}', '\u{06AB}', '\u{06AC}', '\u{06AD}',
    '\u{06AE}', '\u{06AF}', '\u{06B0}', '\u{06B1}', '\u{06B2}', '\u{06B3}', '\u{06B4}', '\u{06B5}',
    '\u{06B6}', '\u{06B7}', '\u{06B8}', '\u{06B9}', '\u{06BA}', '\u{06BB}', '\u{06BC}', '\u{06BD}',
    '\u{06BE}', '\u{06BF}', '\u{06C0}', '\u{06C1}', '\u{06C2}', '\u{06C3}', '\u{06C4}', '\u{06C5}',
    '\u{06C6}', '\u{06C7}', '\u{06C8}', '\u{06C9}', '\u{06CA}', '\u{06CB}', '\u{06CC}', '\u{06CD}',
    '\u{06CE}', '\u{06CF}', '\u{06D0}', '\u{06D1}', '\u{06D2}', '\u{06D3}', '\u{06D5}', '\u{06EE}',
    '\u{06EF}', '\u{06FA}', '\u{06FB}', '\u{06FC}', '\u{06FF}', '\u{0710}', '\u{0712}', '\u{0713}',
    '\u{0714}', '\u{0715}', '\u{0716}', '\u{0717}', '\u{0718}', '\u{0719}', '\u{071A}', '\u{071B}',
    '\u{071C}', '\u{071D}', '\u{071E}', '\u{071F}', '\u{0720}', '\u{0721}', '\u{0722}', '\u{0723}',
    '\u{0724}', '\u{0725}', '\u{0726}', '\u{0727}', '\u{0728}', '\u{0729}', '\u{072A}', '\u{072B}',
    '\u{072C}', '\u{072D}', '\u{072E}', '\u{072F}', '\u{074D}', '\u{074E}', '\u{074F}', '\u{0750}',
    '\u{0751}', '\u{0752}', '\u{0753}', '\u{0754}', '\u{0755}', '\u{0756}', '\u{0757}', '\u{0758}',
    '\u{0759}', '\u{075A}', '\u{075B}', '\u{075C}', '\u{075D}', '\u{075E}', '\u{075F}', '\u{0760}',
    '\u{0761}', '\u{0762}', '\u{0763}', '\u{0764}', '\u{0765}', '\u{0766}', '\u{0767}', '\u{0768}',
    '\u{0769}', '\u{076A}', '\u{076B}', '\u{076C}', '\u{076D}', '\u{076E}', '\u{076F}', '\u{0770}',
    '\u{0771}', '\u{0772}', '\u{0773}', '\u{0774}', '\u{0775}', '\u{0776}', '\u{0777}', '\u{0778}',
    '\u{0779}', '\u{077A}', '\u{077B}', '\u{077C}', '\u{077D}', '\u{077E}', '\u{077F}', '\u{0780}',
    '\u{0781}', '\u{0782}', '\u{0783}', '\u{0784}', '\u{0785}', '\u{0786}', '\u{0787}', '\u{0788}',
    '\u{0789}', '\u{078A}', '\u{078B}', '\u{078C}', '\u{078D}', '\u{078E}', '\u{078F}', '\u{0790}',
    '\u{0791}', '\u{0792}', '\u{0793}', '\u{0794}', '\u{0795}', '\u{0796}', '\u{0797}', '\u{0798}',
    '\u{0799}', '\u{079A}', '\u{079B}', '\u{079C}', '\u{079D}', '\u{079E}', '\u{079F}', '\u{07A0}',
    '\u{07A1}', '\u{07A2}', '\u{07A3}', '\u{07A4}', '\u{07A5}', '\u{07B1}', '\u{07CA}', '\u{07CB}',
    '\u{07CC}', '\u{07CD}', '\u{07CE}', '\u{07CF}', '\u{07D0}', '\u{07D1}', '\u{07D2}', '\u{07D3}',
    '\u{07D4}', '\u{07D5}', '\u{07D6}', '\u{07D7}', '\u{07D8}', '\u{07D9}', '\u{07DA}', '\u{07DB}',
    '\u{07DC}', '\u{07DD}', '\u{07DE}', '\u{07DF}', '\u{07E0}', '\u{07E1}', '\u{07E2}', '\u{07E3}',
    '\u{07E4}', '\u{07E5}', '\u{07E6}', '\u{07E7}', '\u{07E8}', '\u{07E9}', '\u{07EA}', '\u{0800}',
    '\u{0801}', '\u{0802}', '\u{0803}', '\u{0804}', '\u{0805}', '\u{0806}', '\u{0807}', '\u{0808}',
    '\u{0809}', '\u{080A}', '\u{080B}', '\u{080C}', '\u{080D}', '\u{080E}', '\u{080F}', '\u{0810}',
    '\u{0811}', '\u{0812}', '\u{0813}', '\u{0814}', '\u{0815}', '\u{0840}', '\u{0841}', '\u{0842}',
    '\u{0843}', '\u{0844}', '\u{0845}', '\u{0846}', '\u{0847}', '\u{0848}', '\u{0849}', '\u{084A}',
    '\u{084B}', '\u{084C}', '\u{084D}', '\u{084E}', '\u{084F}', '\u{0850}', '\u{0851}', '\u{0852}',
    '\u{0853}', '\u{0854}', '\u{0855}', '\u{0856}', '\u{0857}', '\u{0858}', '\u{0860}', '\u{0861}',
    '\u{0862}', '\u{0863}', '\u{0864}', '\u{0865}', '\u{0866}', '\u{0867}', '\u{0868}', '\u{0869}',
    '\u{086A}', '\u{0870}', '\u{0871}', '\u{0872}', '\u{0873}', '\u{0874}', '\u{0875}', '\u{0876}',
    '\u{0877}', '\u{0878}', '\u{0879}', '\u{087A}', '\u{087B}', '\u{087C}', '\u{087D}', '\u{087E}',
    '\u{087F}', '\u{0880}', '\u{0881}', '\u{0882}', '\u{0883}', '\u{0884}', '\u{0885}', '\u{0886}',
    '\u{0887}', '\u{0889}', '\u{088A}', '\u{088B}', '\u{088C}', '\u{088D}', '\u{088E}', '\u{08A0}',
    '\u{08A1}', '\u{08A2}', '\u{08A3}', '\u{08A4}', '\u{08A5}', '\u{08A6}', '\u{08A7}', '\u{08A8}',
    '\u{08A9}', '\u{08AA}', '\u{08AB}', '\u{08AC}', '\u{08AD}', '\u{08AE}', '\u{08AF}', '\u{08B0}',
    '\u{08B1}', '\u{08B2}', '\u{08B3}', '\u{08B4}', '\u{08B5}', '\u{08B6}', '\u{08B7}', '\u{08B8}',
    '\u{08B9}', '\u{08BA}', '\u{08BB}', '\u{08BC}', '\u{08BD}', '\u{08BE}', '\u{08BF}', '\u{08C0}',
    '\u{08C1}', '\u{08C2}', '\u{08C3}', '\u{08C4}', '\u{08C5}', '\u{08C6}', '\u{08C7}', '\u{08C8}',
    '\u{0904}', '\u{0905}', '\u{0906}', '\u{0907}', '\u{0908}', '\u{0909}', '\u{090A}', '\u{090B}',
    '\u{090C}', '\u{090D}', '\u{090E}', '\u{090F}', '\u{0910}', '\u{0911}', '\u{0912}', '\u{0913}',
    '\u{0914}', '\u{0915}', '\u{0916}', '\u{0917}', '\u{0918}', '\u{0919}', '\u{091A}', '\u{091B}',
    '\u{091C}', '\u{091D}', '\u{091E}', '\u{091F}', '\u{0920}', '\u{0921}', '\u{0922}', '\u{0923}',
    '\u{0924}', '\u{0925}', '\u{0926}', '\u{0927}', '\u{0928}', '\u{0929}', '\u{092A}', '\u{092B}',
    '\u{092C}', '\u{092D}', '\u{092E}', '\u{092F}', '\u{0930}', '\u{0931}', '\u{0932}', '\u{0933}',
    '\u{0934}', '\u{0935}', '\u{0936}', '\u{0937}', '\u{0938}', '\u{0939}', '\u{093D}', '\u{0950}',
    '\u{0958}', '\u{0959}', '\u{095A}', '\u{095B}', '\u{095C}', '\u{095D}', '\u{095E}', '\u{095F}',
    '\u{0960}', '\u{0961}', '\u{0972}', '\u{0973}', '\u{0974}', '\u{0975}', '\u{0976}', '\u{0977}',
    '\u{0978}', '\u{0979}', '\u{097A}', '\u{097B}', '\u{097C}', '\u{097D}', '\u{097E}', '\u{097F}',
    '\u{0980}', '\u{0985}', '\u{0986}', '\u{0987}', '\u{0988}', '\u{0989}', '\u{098A}', '\u{098B}',
    '\u{098C}', '\u{098F}', '\u{0990}', '\u{0993}', '\u{0994}', '\u{0995}', '\u{0996}', '\u{0997}',
    '\u{0998}', '\u{0999}', '\u{099A}', '\u{099B}', '\u{099C}', '\u{099D}', '\u{099E}', '\u{099F}',
    '\u{09A0}', '\u{09A1}', '\u{09A2}', '\u{09A3}', '\u{09A4}', '\u{09A5}', '\u{09A6}', '\u{09A7}',
    '\u{09A8}', '\u{09AA}', '\u{09AB}', '\u{09AC}', '\u{09AD}', '\u{09AE}', '\u{09AF}', '\u{09B0}',
    '\u{09B2}', '\u{09B6}', '\u{09B7}', '\u{09B8}', '\u{09B9}', '\u{09BD}', '\u{09CE}', '\u{09DC}',
    '\u{09DD}', '\u{09DF}', '\u{09E0}', '\u{09E1}', '\u{09F0}', '\u{09F1}', '\u{09FC}', '\u{0A05}',
    '\u{0A06}', '\u{0A07}', '\u{0A08}', '\u{0A09}', '\u{0A0A}', '\u{0A0F}', '\u{0A10}', '\u{0A13}',
    '\u{0A14}', '\u{0A15}', '\u{0A16}', '\u{0A17}', '\u{0A18}', '\u{0A19}', '\u{0A1A}', '\u{0A1B}',
    '\u{0A1C}', '\u{0A1D}', '\u{0A1E}', '\u{0A1F}', '\u{0A20}', '\u{0A21}', '\u{0A22}', '\u{0A23}',
    '\u{0A24}', '\u{0A25}', '\u{0A26}', '\u{0A27}', '\u{0A28}', '\u{0A2A}', '\u{0A2B}', '\u{0A2C}',
    '\u{0A2D}', '\u{0A2E}', '\u{0A2F}', '\u{0A30}', '\u{0A32}', '\u{0A33}', '\u{0A35}', '\u{0A36}',
    '\u{0A38}', '\u{0A39}', '\u{0A59}', '\u{0A5A}', '\u{0A5B}', '\u{0A5C}', '\u{0A5E}', '\u{0A72}',
    '\u{0A73}', '\u{0A74}', '\u{0A85}', '\u{0A86}', '\u{0A87}', '\u{0A88}', '\u{0A89}', '\u{0A8A}',
    '\u{0A8B}', '\u{0A8C}', '\u{0A8D}', '\u{0A8F}', '\u{0A90}', '\u{0A91}', '\u{0A93}', '\u{0A94}',
    '\u{0A95}', '\u{0A96}', '\u{0A97}', '\u{0A98}', '\u{0A99}', '\u{0A9A}', '\u{0A9B}', '\u{0A9C}',
    '\u{0A9D}', '\u{0A9E}', '\u{0A9F}', '\u{0AA0}', '\u{0AA1}', '\u{0AA2}', '\u{0AA3}', '\u{0AA4}',
    '\u{0AA5}', '\u{0AA6}', '\u{0AA7}', '\u{0AA8}', '\u{0AAA}', '\u{0AAB}', '\u{0AAC}', '\u{0AAD}',
    '\u{0AAE}', '\u{0AAF}', '\u{0AB0}', '\u{0AB2}', '\u{0AB3}', '\u{0AB5}', '\u{0AB6}', '\u{0AB7}',
    '\u{0AB8}', '\u{0AB9}', '\u{0ABD}', '\u{0AD0}', '\u{0AE0}', '\u{0AE1}', '\u{0AF9}', '\u{0B05}',
    '\u{0B06}', '\u{0B07}', '\u{0B08}', '\u{0B09}', '\u{0B0A}', '\u{0B0B}', '\u{0B0C}', '\u{0B0F}',
    '\u{0B10}', '\u{0B13}', '\u{0B14}', '\u{0B15}', '\u{0B16}', '\u{0B17}', '\u{0B18}', '\u{0B19}',
    '\u{0B1A}', '\u{0B1B}', '\u{0B1C}', '\u{0B1D}', '\u{0B1E}', '\u{0B1F}', '\u{0B20}', '\u{0B21}',
    '\u{0B22}', '\u{0B23}', '\u{0B24}', '\u{0B25}', '\u{0B26}', '\u{0B27}', '\u{0B28}', '\u{0B2A}',
    '\u{0B2B}', '\u{0B2C}', '\u{0B2D}', '\u{0B2E}', '\u{0B2F}', '\u{0B30}', '\u{0B32}', '\u{0B33}',
    '\u{0B35}', '\u{0B36}', '\u{0B37}', '\u{0B38}', '\u{0B39}', '\u{0B3D}', '\u{0B5C}', '\u{0B5D}',
    '\u{0B5F}', '\u{0B60}', '\u{0B61}', '\u{0B71}', '\u{0B83}', '\u{0B85}', '\u{0B86}', '\u{0B87}',
    '\u{0B88}', '\u{0B89}', '\u{0B8A}', '\u{0B8E}', '\u{0B8F}', '\u{0B90}', '\u{0B92}', '\u{0B93}',
    '\u{0B94}', '\u{0B95}', '\u{0B99}', '\u{0B9A}', '\u{0B9C}', '\u{0B9E}', '\u{0B9F}', '\u{0BA3}',
    '\u{0BA4}', '\u{0BA8}', '\u{0BA9}', '\u{0BAA}', '\u{0BAE}', '\u{0BAF}', '\u{0BB0}', '\u{0BB1}',
    '\u{0BB2}', '\u{0BB3}', '\u{0BB4}', '\u{0BB5}', '\u{0BB6}', '\u{0BB7}', '\u{0BB8}', '\u{0BB9}',
    '\u{0BD0}', '\u{0C05}', '\u{0C06}', '\u{0C07}', '\u{0C08}', '\u{0C09}', '\u{0C0A}', '\u{0C0B}',
    '\u{0C0C}', '\u{0C0E}', '\u{0C0F}', '\u{0C10}', '\u{0C12}', '\u{0C13}', '\u{0C14}', '\u{0C15}',
    '\u{0C16}', '\u{0C17}', '\u{0C18}', '\u{0C19}', '\u{0C1A}', '\u{0C1B}', '\u{0C1C}', '\u{0C1D}',
    '\u{0C1E}', '\u{0C1F}', '\u{0C20}', '\u{0C21}', '\u{0C22}', '\u{0C23}', '\u{0C24}', '\u{0C25}',
    '\u{0C26}', '\u{0C27}', '\u{0C28}', '\u{0C2A}', '\u{0C2B}', '\u{0C2C}', '\u{0C2D}', '\u{0C2E}',
    '\u{0C2F}', '\u{0C30}', '\u{0C31}', '\u{0C32}', '\u{0C33}', '\u{0C34}', '\u{0C35}', '\u{0C36}',
    '\u{0C37}', '\u{0C38}', '\u{0C39}', '\u{0C3D}', '\u{0C58}', '\u{0C59}', '\u{0C5A}', '\u{0C5D}',
    '\u{0C60}', '\u{0C61}', '\u{0C80}', '\u{0C85}', '\u{0C86}', '\u{0C87}', '\u{0C88}', '\u{0C89}',
    '\u{0C8A}', '\u{0C8B}', '\u{0C8C}', '\u{0C8E}', '\u{0C8F}', '\u{0C90}', '\u{0C92}', '\u{0C93}',
    '\u{0C94}', '\u{0C95}', '\u{0C96}', '\u{0C97}', '\u{0C98}', '\u{0C99}', '\u{0C9A}', '\u{0C9B}',
    '\u{0C9C}', '\u{0C9D}', '\u{0C9E}', '\u{0C9F}', '\u{0CA0}', '\u{0CA1}', '\u{0CA2}', '\u{0CA3}',
    '\u{0CA4}', '\u{0CA5}', '\u{0CA6}', '\u{0CA7}', '\u{0CA8}', '\u{0CAA}', '\u{0CAB}', '\u{0CAC}',
    '\u{0CAD}', '\u{0CAE}', '\u{0CAF}', '\u{0CB0}', '\u{0CB1}', '\u{0CB2}', '\u{0CB3}', '\u{0CB5}',
    '\u{0CB6}', '\u{0CB7}', '\u{0CB8}', '\u{0CB9}', '\u{0CBD}', '\u{0CDD}', '\u{0CDE}', '\u{0CE0}',
    '\u{0CE1}', '\u{0CF1}', '\u{0CF2}', '\u{0D04}', '\u{0D05}', '\u{0D06}', '\u{0D07}', '\u{0D08}',
    '\u{0D09}', '\u{0D0A}', '\u{0D0B}', '\u{0D0C}', '\u{0D0E}', '\u{0D0F}', '\u{0D10}', '\u{0D12}',
    '\u{0D13}', '\u{0D14}', '\u{0D15}', '\u{0D16}', '\u{0D17}', '\u{0D18}', '\u{0D19}', '\u{0D1A}',
    '\u{0D1B}', '\u{0D1C}', '\u{0D1D}', '\u{0D1E}', '\u{0D1F}', '\u{0D20}', '\u{0D21}', '\u{0D22}',
    '\u{0D23}', '\u{0D24}', '\u{0D25}', '\u{0D26}', '\u{0D27}', '\u{0D28}', '\u{0D29}', '\u{0D2A}',
    '\u{0D2B}', '\u{0D2C}', '\u{0D2D}', '\u{0D2E}', '\u{0D2F}', '\u{0D30}', '\u{0D31}', '\u{0D32}',
    '\u{0D33}', '\u{0D34}', '\u{0D35}', '\u{0D36}', '\u{0D37}', '\u{0D38}', '\u{0D39}', '\u{0D3A}',
    '\u{0D3D}', '\u{0D4E}', '\u{0D54}', '\u{0D55}', '\u{0D56}', '\u{0D5F}', '\u{0D60}', '\u{0D61}',
    '\u{0D7A}', '\u{0D7B}', '\u{0D7C}', '\u{0D7D}', '\u{0D7E}', '\u{0D7F}', '\u{0D85}', '\u{0D86}',
    '\u{0D87}', '\u{0D88}', '\u{0D89}', '\u{0D8A}', '\u{0D8B}', '\u{0D8C}', '\u{0D8D}', '\u{0D8E}',
    '\u{0D8F}', '\u{0D90}', '\u{0D91}', '\u{0D92}', '\u{0D93}', '\u{0D94}', '\u{0D95}', '\u{0D96}',
    '\u{0D9A}', '\u{0D9B}', '\u{0D9C}', '\u{0D9D}', '\u{0D9E}', '\u{0D9F}', '\u{0DA0}', '\u{0DA1}',
    '\u{0DA2}', '\u{0DA3}', '\u{0DA4}', '\u{0DA5}', '\u{0DA6}', '\u{0DA7}', '\u{0DA8}', '\u{0DA9}',
    '\u{0DAA}', '\u{0DAB}', '\u{0DAC}', '\u{0DAD}', '\u{0DAE}', '\u{0DAF}', '\u{0DB0}', '\u{0DB1}',
    '\u{0DB3}', '\u{0DB4}', '\u{0DB5}', '\u{0DB6}', '\u{0DB7}', '\u{0DB8}', '\u{0DB9}', '\u{0DBA}',
    '\u{0DBB}', '\u{0DBD}', '\u{0DC0}', '\u{0DC1}', '\u{0DC2}', '\u{0DC3}', '\u{0DC4}', '\u{0DC5}',
    '\u{0DC6}', '\u{0E01}', '\u{0E02}', '\u{0E03}', '\u{0E04}', '\u{0E05}', '\u{0E06}', '\u{0E07}',
    '\u{0E08}', '\u{0E09}', '\u{0E0A}', '\u{0E0B}', '\u{0E0C}', '\u{0E0D}', '\u{0E0E}', '\u{0E0F}',
    '\u{0E10}', '\u{0E11}', '\u{0E12}', '\u{0E13}', '\u{0E14}', '\u{0E15}', '\u{0E16}', '\u{0E17}',
    '\u{0E18}', '\u{0E19}', '\u{0E1A}', '\u{0E1B}', '\u{0E1C}', '\u{0E1D}', '\u{0E1E}', '\u{0E1F}',
    '\u{0E20}', '\u{0E21}', '\u{0E22}', '\u{0E23}', '\u{0E24}', '\u{0E25}', '\u{0E26}', '\u{0E27}',
    '\u{0E28}', '\u{0E29}', '\u{0E2A}', '\u{0E2B}', '\u{0E2C}', '\u{0E2D}', '\u{0E2E}', '\u{0E2F}',
    '\u{0E30}', '\u{0E32}', '\u{0E33}', '\u{0E40}', '\u{0E41}', '\u{0E42}', '\u{0E43}', '\u{0E44}',
    '\u{0E45}', '\u{0E81}', '\u{0E82}', '\u{0E84}', '\u{0E86}', '\u{0E87}', '\u{0E88}', '\u{0E89}',
    '\u{0E8A}', '\u{0E8C}', '\u{0E8D}', '\u{0E8E}', '\u{0E8F}', '\u{0E90}', '\u{0E91}', '\u{0E92}',
    '\u{0E93}', '\u{0E94}', '\u{0E95}', '\u{0E96}', '\u{0E97}', '\u{0E98}', '\u{0E99}', '\u{0E9A}',
    '\u{0E9B}', '\u{0E9C}', '\u{0E9D}', '\u{0E9E}', '\u{0E9F}', '\u{0EA0}', '\u{0EA1}', '\u{0EA2}',
    '\u{0EA3}', '\u{0EA5}', '\u{0EA7}', '\u{0EA8}', '\u{0EA9}', '\u{0EAA}', '\u{0EAB}', '\u{0EAC}',
    '\u{0EAD}', '\u{0EAE}', '\u{0EAF}', '\u{0EB0}', '\u{0EB2}', '\u{0EB3}', '\u{0EBD}', '\u{0EC0}',
    '\u{0EC1}', '\u{0EC2}', '\u{0EC3}', '\u{0EC4}', '\u{0EDC}', '\u{0EDD}', '\u{0EDE}', '\u{0EDF}',
    '\u{0F00}', '\u{0F40}', '\u{0F41}', '\u{0F42}', '\u{0F43}', '\u{0F44}', '\u{0F45}', '\u{0F46}',
    '\u{0F47}', '\u{0F49}', '\u{0F4A}', '\u{0F4B}', '\u{0F4C}', '\u{0F4D}', '\u{0F4E}', '\u{0F4F}',
    '\u{0F50}', '\u{0F51}', '\u{0F52}', '\u{0F53}', '\u{0F54}', '\u{0F55}', '\u{0F56}', '\u{0F57}',
    '\u{0F58}', '\u{0F59}', '\u{0F5A}', '\u{0F5B}', '\u{0F5C}', '\u{0F5D}', '\u{0F5E}', '\u{0F5F}',
    '\u{0F60}', '\u{0F61}', '\u{0F62}', '\u{0F63}', '\u{0F64}', '\u{0F65}', '\u{0F66}', '\u{0F67}',
    '\u{0F68}', '\u{0F69}', '\u{0F6A}', '\u{0F6B}', '\u{0F6C}', '\u{0F88}', '\u{0F89}', '\u{0F8A}',
    '\u{0F8B}', '\u{0F8C}', '\u{1000}', '\u{1001}', '\u{1002}', '\u{1003}', '\u{1004}', '\u{1005}',
    '\u{1006}', '\u{1007}', '\u{1008}', '\u{1009}', '\u{100A}', '\u{100B}', '\u{100C}', '\u{100D}',
    '\u{100E}', '\u{100F}', '\u{1010}', '\u{1011}', '\u{1012}', '\u{1013}', '\u{1014}', '\u{1015}',
    '\u{1016}', '\u{1017}', '\u{1018}', '\u{1019}', '\u{101A}', '\u{101B}', '\u{101C}', '\u{101D}',
    '\u{101E}', '\u{101F}', '\u{1020}', '\u{1021}', '\u{1022}', '\u{1023}', '\u{1024}', '\u{1025}',
    '\u{1026}', '\u{1027}', '\u{1028}', '\u{1029}', '\u{102A}', '\u{103F}', '\u{1050}', '\u{1051}',
    '\u{1052}', '\u{1053}', '\u{1054}', '\u{1055}', '\u{105A}', '\u{105B}', '\u{105C}', '\u{105D}',
    '\u{1061}', '\u{1065}', '\u{1066}', '\u{106E}', '\u{106F}', '\u{1070}', '\u{1075}', '\u{1076}',
    '\u{1077}', '\u{1078}', '\u{1079}', '\u{107A}', '\u{107B}', '\u{107C}', '\u{107D}', '\u{107E}',
    '\u{107F}', '\u{1080}', '\u{1081}', '\u{108E}', '\u{10A0}', '\u{10A1}', '\u{10A2}', '\u{10A3}',
    '\u{10A4}', '\u{10A5}', '\u{10A6}', '\u{10A7}', '\u{10A8}', '\u{10A9}', '\u{10AA}', '\u{10AB}',
    '\u{10AC}', '\u{10AD}', '\u{10AE}', '\u{10AF}', '\u{10B0}', '\u{10B1}', '\u{10B2}', '\u{10B3}',
    '\u{10B4}', '\u{10B5}', '\u{10B6}', '\u{10B7}', '\u{10B8}', '\u{10B9}', '\u{10BA}', '\u{10BB}',
    '\u{10BC}', '\u{10BD}', '\u{10BE}', '\u{10BF}', '\u{10C0}', '\u{10C1}', '\u{10C2}', '\u{10C3}',
    '\u{10C4}', '\u{10C5}', '\u{10C7}', '\u{10CD}', '\u{10D0}', '\u{10D1}', '\u{10D2}', '\u{10D3}',
    '\u{10D4}', '\u{10D5}', '\u{10D6}', '\u{10D7}', '\u{10D8}', '\u{10D9}', '\u{10DA}', '\u{10DB}',
    '\u{10DC}', '\u{10DD}', '\u{10DE}', '\u{10DF}', '\u{10E0}', '\u{10E1}', '\u{10E2}', '\u{10E3}',
    '\u{10E4}', '\u{10E5}', '\u{10E6}', '\u{10E7}', '\u{10E8}', '\u{10E9}', '\u{10EA}', '\u{10EB}',
    '\u{10EC}', '\u{10ED}', '\u{10EE}', '\u{10EF}', '\u{10F0}', '\u{10F1}', '\u{10F2}', '\u{10F3}',
];
